pub mod dashboards;
pub mod health;

pub use dashboards::{list_dashboards_handler, load_dashboard_handler, save_dashboard_handler};
pub use health::{health_handler, readiness_handler};
