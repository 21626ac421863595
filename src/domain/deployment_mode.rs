use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid deployment mode: {0} (expected development or production)")]
pub struct InvalidDeploymentMode(pub String);

/// How much diagnostic detail the process may expose.
///
/// Decided once at startup and passed by value afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    /// Diagnostics visible
    Development,
    /// Diagnostics hidden
    #[default]
    Production,
}

impl DeploymentMode {
    pub fn is_development(self) -> bool {
        matches!(self, DeploymentMode::Development)
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentMode::Development => write!(f, "development"),
            DeploymentMode::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for DeploymentMode {
    type Err = InvalidDeploymentMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(DeploymentMode::Development),
            "production" | "prod" => Ok(DeploymentMode::Production),
            _ => Err(InvalidDeploymentMode(s.to_string())),
        }
    }
}
