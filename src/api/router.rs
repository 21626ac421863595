use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer};

use crate::api::errors::fault_from_panic;
use crate::api::handlers::{
    health_handler, list_dashboards_handler, load_dashboard_handler, readiness_handler,
    save_dashboard_handler,
};
use crate::api::middleware::{intercept_faults, request_logging, unhandled_faults, FaultInterceptor};
use crate::application::use_cases::DashboardService;
use crate::domain::DeploymentMode;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub dashboards: Arc<DashboardService>,
    pub interceptor: Arc<FaultInterceptor>,
    pub mode: DeploymentMode,
    pub max_dashboard_bytes: usize,
}

/// Dashboard handler group, wrapped by the fault interceptor.
///
/// Only this group is intercepted; every other route keeps the host's
/// default fault rendering.
pub fn dashboard_routes(state: &AppState) -> Router {
    let routes = Router::new()
        .route("/api/dashboards", get(list_dashboards_handler))
        .route(
            "/api/dashboards/{id}",
            get(load_dashboard_handler).put(save_dashboard_handler),
        )
        .with_state(Arc::clone(&state.dashboards))
        // Replace axum's 2 MiB extractor cap with the configured limit
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.max_dashboard_bytes));

    intercept_faults(routes, Arc::clone(&state.interceptor))
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health checks (not intercepted)
        .route("/health", get(health_handler).with_state(state.mode))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.dashboards)),
        )
        .merge(dashboard_routes(&state))
        // Host defaults: panics and unclaimed faults outside the dashboard group
        .layer(CatchPanicLayer::custom(fault_from_panic))
        .layer(axum_middleware::from_fn_with_state(
            state.mode,
            unhandled_faults::render_unhandled_faults,
        ))
        .layer(axum_middleware::from_fn(
            request_logging::request_logging_middleware,
        ))
}
