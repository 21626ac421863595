mod dashboards;

pub use dashboards::DashboardService;
