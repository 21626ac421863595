use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{DashboardStorage, StorageError};
use crate::domain::entities::DashboardInfo;
use crate::domain::value_objects::DashboardId;

/// Storage whose backend is down: it advertises one dashboard and fails
/// every load. Used to exercise fault interception end to end.
pub struct UnavailableDashboardStorage {
    dashboard: DashboardId,
    reason: String,
}

impl UnavailableDashboardStorage {
    pub fn new(dashboard: DashboardId, reason: impl Into<String>) -> Self {
        Self {
            dashboard,
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableDashboardStorage {
    fn default() -> Self {
        Self::new(
            DashboardId::default(),
            "cannot open database \"Northwind123\" requested by the login on server \
             localhost (MsSql, Windows authentication)",
        )
    }
}

#[async_trait]
impl DashboardStorage for UnavailableDashboardStorage {
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, StorageError> {
        Ok(vec![DashboardInfo::from_id(self.dashboard.clone())])
    }

    async fn load_dashboard(&self, id: &DashboardId) -> Result<String, StorageError> {
        debug!(dashboard_id = %id, "simulating backend failure");
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    async fn save_dashboard(
        &self,
        _id: &DashboardId,
        _document: String,
    ) -> Result<(), StorageError> {
        Ok(())
    }
}
