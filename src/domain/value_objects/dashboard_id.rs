use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Validated dashboard identifier, safe to use as a file stem
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DashboardId(String);

impl DashboardId {
    const MAX_LENGTH: usize = 64;

    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidDashboardId(
                "Dashboard ID cannot be empty".to_string(),
            ));
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidDashboardId(format!(
                "Dashboard ID too long: {} > {}",
                value.len(),
                Self::MAX_LENGTH
            )));
        }

        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::InvalidDashboardId(
                "Dashboard ID must be alphanumeric with underscores/hyphens".to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DashboardId {
    fn default() -> Self {
        // "Dashboard" is the id the stock dashboard designer creates
        Self("Dashboard".to_string())
    }
}

impl std::fmt::Display for DashboardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DashboardId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for DashboardId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DashboardId> for String {
    fn from(id: DashboardId) -> Self {
        id.0
    }
}
