use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ports::{DashboardStorage, StorageError};
use crate::domain::entities::DashboardInfo;
use crate::domain::value_objects::DashboardId;

const DOCUMENT_EXTENSION: &str = "xml";

/// Dashboard storage keeping one `<id>.xml` document per dashboard
pub struct FileDashboardStorage {
    root: PathBuf,
}

impl FileDashboardStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await?;
        fs::create_dir_all(self.temp_dir()).await?;
        Ok(())
    }

    fn temp_dir(&self) -> PathBuf {
        self.root.join(".tmp")
    }

    fn root_missing(&self) -> StorageError {
        StorageError::Unavailable(format!(
            "dashboard root {} does not exist",
            self.root.display()
        ))
    }

    fn document_path(&self, id: &DashboardId) -> PathBuf {
        self.root
            .join(format!("{}.{}", id.as_str(), DOCUMENT_EXTENSION))
    }
}

#[async_trait]
impl DashboardStorage for FileDashboardStorage {
    async fn list_dashboards(&self) -> Result<Vec<DashboardInfo>, StorageError> {
        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(self.root_missing()),
            Err(e) => return Err(e.into()),
        };

        let mut dashboards = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match stem.parse::<DashboardId>() {
                Ok(id) => dashboards.push(DashboardInfo::from_id(id)),
                Err(_) => warn!(path = %path.display(), "skipping file with invalid dashboard id"),
            }
        }

        Ok(dashboards)
    }

    async fn load_dashboard(&self, id: &DashboardId) -> Result<String, StorageError> {
        let path = self.document_path(id);
        match fs::read_to_string(&path).await {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // A missing root is an outage, not a missing dashboard
                if fs::try_exists(&self.root).await? {
                    Err(StorageError::NotFound(id.to_string()))
                } else {
                    Err(self.root_missing())
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save_dashboard(
        &self,
        id: &DashboardId,
        document: String,
    ) -> Result<(), StorageError> {
        // Write to a temp file first so readers never see a partial document
        let temp_path = self.temp_dir().join(Uuid::new_v4().to_string());
        fs::create_dir_all(self.temp_dir()).await?;
        fs::write(&temp_path, document.as_bytes()).await?;

        let final_path = self.document_path(id);
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(path = %final_path.display(), "dashboard document written");
        Ok(())
    }
}
