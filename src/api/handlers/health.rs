use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::application::use_cases::DashboardService;
use crate::domain::{DeploymentMode, Fault};

/// GET /health
/// Basic health check endpoint (no storage check)
pub async fn health_handler(
    State(mode): State<DeploymentMode>,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "dashboard_shield",
            "version": env!("CARGO_PKG_VERSION"),
            "environment": mode.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /health/ready
/// Readiness probe listing the dashboard storage.
///
/// Not part of the intercepted dashboard group: a storage failure here is
/// rendered by the host default.
pub async fn readiness_handler(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<serde_json::Value>, Fault> {
    let start_time = Instant::now();
    let dashboards = service.list().await?;
    let response_time = start_time.elapsed();

    Ok(Json(json!({
        "status": "ready",
        "service": "dashboard_shield",
        "storage": "connected",
        "dashboards": dashboards.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "response_time_ms": response_time.as_millis(),
    })))
}
