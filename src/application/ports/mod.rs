mod dashboard_storage;

pub use dashboard_storage::{DashboardStorage, StorageError};

#[cfg(test)]
pub use dashboard_storage::MockDashboardStorage;
