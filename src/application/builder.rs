use std::sync::Arc;

use tracing::info;

use crate::api::middleware::FaultInterceptor;
use crate::api::router::AppState;
use crate::application::{
    disclosure::{DisclosurePolicy, MessageCatalog},
    ports::DashboardStorage,
    use_cases::DashboardService,
};
use crate::config::{Config, DashboardBackend};
use crate::infrastructure::storage::{
    FileDashboardStorage, InMemoryDashboardStorage, UnavailableDashboardStorage,
};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    storage: Option<Arc<dyn DashboardStorage>>,
    catalog: Option<MessageCatalog>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: None,
            catalog: None,
        }
    }

    /// Initialize the configured dashboard storage backend
    pub async fn with_storage(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let storage: Arc<dyn DashboardStorage> = match self.config.dashboard_backend {
            DashboardBackend::File => {
                let storage = FileDashboardStorage::new(self.config.dashboard_root.clone());
                storage.init().await?;
                Arc::new(storage)
            }
            DashboardBackend::Memory => Arc::new(InMemoryDashboardStorage::new()),
            DashboardBackend::Unavailable => Arc::new(UnavailableDashboardStorage::default()),
        };

        info!(backend = %self.config.dashboard_backend, "Dashboard storage initialized");
        self.storage = Some(storage);
        Ok(self)
    }

    /// Use an already constructed storage backend
    pub fn with_storage_backend(mut self, storage: Arc<dyn DashboardStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Load the message catalog from `messages_path`, or the built-in one
    pub fn with_messages(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = match &self.config.messages_path {
            Some(path) => {
                info!(path = %path.display(), "Loading disclosure message catalog");
                MessageCatalog::from_file(path)?
            }
            None => MessageCatalog::default(),
        };

        info!(
            classes = catalog.classes.len(),
            "Disclosure message catalog ready"
        );
        self.catalog = Some(catalog);
        Ok(self)
    }

    /// Use an explicit message catalog
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build application state
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let storage = self.storage.ok_or("Dashboard storage not initialized")?;
        let catalog = self.catalog.unwrap_or_default();
        catalog.validate()?;

        let mode = self.config.deployment_mode;
        let interceptor = Arc::new(FaultInterceptor::new(DisclosurePolicy::new(catalog), mode));
        let dashboards = Arc::new(DashboardService::new(storage));

        info!(mode = %mode, "Application layer initialized");

        Ok(AppState {
            dashboards,
            interceptor,
            mode,
            max_dashboard_bytes: self.config.max_dashboard_bytes,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
