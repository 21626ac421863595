mod dashboard_id;

pub use dashboard_id::DashboardId;
