use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DashboardId;

/// Entry in the list of available dashboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub id: DashboardId,
    pub name: String,
}

impl DashboardInfo {
    pub fn new(id: DashboardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Info whose display name is the identifier itself
    pub fn from_id(id: DashboardId) -> Self {
        let name = id.to_string();
        Self::new(id, name)
    }
}
