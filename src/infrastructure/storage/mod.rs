mod file_dashboard_storage;
mod in_memory_dashboard_storage;
mod unavailable_dashboard_storage;

pub use file_dashboard_storage::FileDashboardStorage;
pub use in_memory_dashboard_storage::InMemoryDashboardStorage;
pub use unavailable_dashboard_storage::UnavailableDashboardStorage;
