use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::domain::{DeploymentMode, FaultClass};

pub const END_USER_MESSAGE: &str = "Custom exception text for end users";
pub const DEVELOPER_MESSAGE: &str = "Custom exception text for developers";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read message catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse message catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid message catalog: {0}")]
    Invalid(String),
}

/// Safe and developer variants of one client-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePair {
    /// Shown in production
    pub safe: String,
    /// Shown in development
    pub developer: String,
}

impl MessagePair {
    pub fn new(safe: impl Into<String>, developer: impl Into<String>) -> Self {
        Self {
            safe: safe.into(),
            developer: developer.into(),
        }
    }

    pub fn select(&self, mode: DeploymentMode) -> &str {
        match mode {
            DeploymentMode::Development => &self.developer,
            DeploymentMode::Production => &self.safe,
        }
    }

    fn validate(&self, owner: &str) -> Result<(), String> {
        if self.safe.trim().is_empty() || self.developer.trim().is_empty() {
            return Err(format!("{owner}: messages cannot be empty"));
        }
        if self.safe == self.developer {
            return Err(format!(
                "{owner}: safe and developer messages must differ"
            ));
        }
        Ok(())
    }
}

/// Registered client-facing messages.
///
/// `fallback` covers unclassified faults and classes with no entry in
/// `classes`. The fallback and every class pair are configured independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    pub fallback: MessagePair,
    #[serde(default)]
    pub classes: BTreeMap<String, MessagePair>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut classes = BTreeMap::new();
        classes.insert(
            FaultClass::BACKEND_UNAVAILABLE.to_string(),
            MessagePair::new(END_USER_MESSAGE, DEVELOPER_MESSAGE),
        );
        classes.insert(
            FaultClass::DASHBOARD_NOT_FOUND.to_string(),
            MessagePair::new(
                "The requested dashboard is not available",
                "Dashboard storage has no document for the requested dashboard ID",
            ),
        );
        classes.insert(
            FaultClass::INVALID_DASHBOARD_ID.to_string(),
            MessagePair::new(
                "The dashboard ID is not valid",
                "Dashboard IDs are 1-64 characters of letters, digits, '_' or '-'",
            ),
        );

        Self {
            fallback: MessagePair::new(END_USER_MESSAGE, DEVELOPER_MESSAGE),
            classes,
        }
    }
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with a fallback pair and no classes registered
    pub fn with_fallback_only(fallback: MessagePair) -> Self {
        Self {
            fallback,
            classes: BTreeMap::new(),
        }
    }

    /// Replace the fallback pair
    pub fn with_fallback(mut self, fallback: MessagePair) -> Self {
        self.fallback = fallback;
        self
    }

    /// Register (or replace) the pair for a fault class
    pub fn with_class(mut self, class: &FaultClass, pair: MessagePair) -> Self {
        self.classes.insert(class.to_string(), pair);
        self
    }

    pub fn pair_for(&self, class: &FaultClass) -> Option<&MessagePair> {
        self.classes.get(class.as_str())
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(source)?;
        catalog.validate().map_err(CatalogError::Invalid)?;
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Every message non-empty, every pair branching on mode
    pub fn validate(&self) -> Result<(), String> {
        self.fallback.validate("fallback")?;
        for (class, pair) in &self.classes {
            if class.trim().is_empty() {
                return Err("class names cannot be empty".to_string());
            }
            pair.validate(class)?;
        }
        Ok(())
    }
}
