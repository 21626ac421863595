use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::DeploymentMode;

/// Where dashboard documents come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardBackend {
    /// One XML file per dashboard under `dashboard_root`
    #[default]
    File,
    /// Process-local, empty at startup
    Memory,
    /// Simulated backend outage: every load fails
    Unavailable,
}

impl std::fmt::Display for DashboardBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardBackend::File => write!(f, "file"),
            DashboardBackend::Memory => write!(f, "memory"),
            DashboardBackend::Unavailable => write!(f, "unavailable"),
        }
    }
}

impl std::str::FromStr for DashboardBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(DashboardBackend::File),
            "memory" => Ok(DashboardBackend::Memory),
            "unavailable" => Ok(DashboardBackend::Unavailable),
            _ => Err(format!("Invalid dashboard backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub deployment_mode: DeploymentMode,
    pub dashboard_backend: DashboardBackend,
    pub dashboard_root: PathBuf,
    /// Optional TOML message catalog; built-in messages when unset
    pub messages_path: Option<PathBuf>,
    pub max_dashboard_bytes: usize,
}

impl Config {
    const MIN_DASHBOARD_BYTES: usize = 1024;
    const MAX_DASHBOARD_BYTES: usize = 64 * 1024 * 1024;

    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            // Unset or unrecognized falls back to the diagnostics-hidden mode
            deployment_mode: std::env::var("APP_ENVIRONMENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            dashboard_backend: std::env::var("DASHBOARD_BACKEND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            dashboard_root: std::env::var("DASHBOARD_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/dashboards")),
            messages_path: std::env::var("DISCLOSURE_MESSAGES")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            max_dashboard_bytes: std::env::var("MAX_DASHBOARD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.max_dashboard_bytes < Self::MIN_DASHBOARD_BYTES
            || self.max_dashboard_bytes > Self::MAX_DASHBOARD_BYTES
        {
            return Err(format!(
                "MAX_DASHBOARD_BYTES must be between {} and {}",
                Self::MIN_DASHBOARD_BYTES,
                Self::MAX_DASHBOARD_BYTES
            ));
        }

        if self.dashboard_backend == DashboardBackend::File
            && self.dashboard_root.as_os_str().is_empty()
        {
            return Err("DASHBOARD_ROOT cannot be empty for the file backend".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            deployment_mode: DeploymentMode::default(),
            dashboard_backend: DashboardBackend::default(),
            dashboard_root: PathBuf::from("data/dashboards"),
            messages_path: None,
            max_dashboard_bytes: 1024 * 1024,
        }
    }
}
