use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::entities::DashboardInfo;
use crate::domain::value_objects::DashboardId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dashboard not found: {0}")]
    NotFound(String),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for dashboard document storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DashboardStorage: Send + Sync {
    /// Dashboards the backend can serve
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, StorageError>;

    /// Load the XML document of a dashboard
    async fn load_dashboard(&self, id: &DashboardId) -> Result<String, StorageError>;

    /// Create or replace the XML document of a dashboard
    async fn save_dashboard(&self, id: &DashboardId, document: String)
        -> Result<(), StorageError>;
}
