use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::application::use_cases::DashboardService;
use crate::domain::entities::DashboardInfo;
use crate::domain::Fault;

/// GET /api/dashboards
/// List dashboards available in storage
pub async fn list_dashboards_handler(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<Vec<DashboardInfo>>, Fault> {
    let dashboards = service.list().await?;
    Ok(Json(dashboards))
}

/// GET /api/dashboards/{id}
/// Load a dashboard's XML document
pub async fn load_dashboard_handler(
    State(service): State<Arc<DashboardService>>,
    Path(id): Path<String>,
) -> Result<Response, Fault> {
    let document = service.load(&id).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], document).into_response())
}

/// PUT /api/dashboards/{id}
/// Create or replace a dashboard's XML document
pub async fn save_dashboard_handler(
    State(service): State<Arc<DashboardService>>,
    Path(id): Path<String>,
    document: String,
) -> Result<StatusCode, Fault> {
    service.save(&id, document).await?;
    Ok(StatusCode::NO_CONTENT)
}
