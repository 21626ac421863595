//! Host default rendering for faults no interceptor claimed
//!
//! Routes outside an intercepted handler group end up here. Development
//! shows the fault detail, the way a developer exception page would;
//! production returns a generic 500.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::{DeploymentMode, Fault};

pub async fn render_unhandled_faults(
    State(mode): State<DeploymentMode>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    render_unhandled(response, mode)
}

pub fn render_unhandled(response: Response, mode: DeploymentMode) -> Response {
    let Some(fault) = response
        .extensions()
        .get::<Fault>()
        .filter(|fault| !fault.is_handled())
        .cloned()
    else {
        return response;
    };

    error!(fault_class = fault.kind().label(), mode = %mode, "unhandled_fault");

    let body = match mode {
        DeploymentMode::Development => format!(
            "Unhandled fault ({})\n\n{}\n",
            fault.kind().label(),
            fault.detail()
        ),
        DeploymentMode::Production => "Internal Server Error".to_string(),
    };

    let mut rendered = (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response();
    rendered.extensions_mut().insert(fault);
    rendered
}
