//! Use case errors and their classification into faults
//!
//! Handlers never build faults by hand: a use case error converts into a
//! [`Fault`] whose class is what interceptors key their message catalog on.
//! Anything without an application-defined class becomes unclassified.

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::domain::errors::DomainError;
use crate::domain::{Fault, FaultClass};

/// Error type for dashboard use cases (list, load, save)
#[derive(Debug, Error)]
pub enum DashboardUseCaseError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<StorageError> for Fault {
    fn from(err: StorageError) -> Self {
        let detail = err.to_string();
        match err {
            StorageError::Unavailable(_) => {
                Fault::classified(FaultClass::BACKEND_UNAVAILABLE, detail)
            }
            StorageError::NotFound(_) => Fault::classified(FaultClass::DASHBOARD_NOT_FOUND, detail),
            StorageError::Io(_) | StorageError::Internal(_) => Fault::unclassified(detail),
        }
    }
}

impl From<DomainError> for Fault {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidDashboardId(_) => {
                Fault::classified(FaultClass::INVALID_DASHBOARD_ID, err.to_string())
            }
        }
    }
}

impl From<DashboardUseCaseError> for Fault {
    fn from(err: DashboardUseCaseError) -> Self {
        match err {
            DashboardUseCaseError::Domain(e) => e.into(),
            DashboardUseCaseError::Storage(e) => e.into(),
        }
    }
}
