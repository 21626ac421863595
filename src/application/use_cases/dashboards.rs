use std::sync::Arc;
use tracing::debug;

use crate::application::errors::DashboardUseCaseError;
use crate::application::ports::DashboardStorage;
use crate::domain::entities::DashboardInfo;
use crate::domain::value_objects::DashboardId;

/// Use case: serve dashboard documents from the configured storage
pub struct DashboardService {
    storage: Arc<dyn DashboardStorage>,
}

impl DashboardService {
    pub fn new(storage: Arc<dyn DashboardStorage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<DashboardInfo>, DashboardUseCaseError> {
        let mut dashboards = self.storage.list_dashboards().await?;
        dashboards.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(count = dashboards.len(), "dashboards_listed");
        Ok(dashboards)
    }

    pub async fn load(&self, id: &str) -> Result<String, DashboardUseCaseError> {
        let id: DashboardId = id.parse()?;
        let document = self.storage.load_dashboard(&id).await?;
        debug!(dashboard_id = %id, bytes = document.len(), "dashboard_loaded");
        Ok(document)
    }

    pub async fn save(&self, id: &str, document: String) -> Result<(), DashboardUseCaseError> {
        let id: DashboardId = id.parse()?;
        let bytes = document.len();
        self.storage.save_dashboard(&id, document).await?;
        debug!(dashboard_id = %id, bytes, "dashboard_saved");
        Ok(())
    }
}
