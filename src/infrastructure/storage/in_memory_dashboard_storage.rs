use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::application::ports::{DashboardStorage, StorageError};
use crate::domain::entities::DashboardInfo;
use crate::domain::value_objects::DashboardId;

/// Process-local dashboard storage
#[derive(Default)]
pub struct InMemoryDashboardStorage {
    documents: RwLock<BTreeMap<DashboardId, String>>,
}

impl InMemoryDashboardStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with documents, e.g. for tests and demos
    pub fn with_documents(documents: impl IntoIterator<Item = (DashboardId, String)>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }
}

#[async_trait]
impl DashboardStorage for InMemoryDashboardStorage {
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, StorageError> {
        Ok(self
            .documents
            .read()
            .keys()
            .cloned()
            .map(DashboardInfo::from_id)
            .collect())
    }

    async fn load_dashboard(&self, id: &DashboardId) -> Result<String, StorageError> {
        self.documents
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn save_dashboard(
        &self,
        id: &DashboardId,
        document: String,
    ) -> Result<(), StorageError> {
        self.documents.write().insert(id.clone(), document);
        Ok(())
    }
}
