mod dashboard;

pub use dashboard::DashboardInfo;
