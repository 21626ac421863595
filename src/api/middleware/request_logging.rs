//! Per-request span and completion event
//!
//! Each request runs inside a `request` span carrying its id, method and
//! path. Status, duration and the fault class (when a fault rode on the
//! response) are recorded on the span once the response is known.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{field, info, info_span, warn, Instrument, Span};
use uuid::Uuid;

use crate::domain::Fault;

static REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Client-supplied id when it is a valid header value, a fresh UUID otherwise
fn request_id(headers: &HeaderMap) -> HeaderValue {
    headers
        .get(&REQUEST_ID)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::try_from(Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

fn record_outcome(span: &Span, response: &Response, started: Instant) -> bool {
    let status = response.status();
    span.record("status", status.as_u16());
    span.record("duration_ms", started.elapsed().as_millis() as u64);

    let fault = response.extensions().get::<Fault>();
    if let Some(fault) = fault {
        span.record("fault_class", fault.kind().label());
        span.record("fault_handled", fault.is_handled());
    }

    status.is_server_error() || fault.is_some()
}

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let id = request_id(request.headers());

    let span = info_span!(
        "request",
        request_id = id.to_str().unwrap_or_default(),
        method = %request.method(),
        path = request.uri().path(),
        status = field::Empty,
        duration_ms = field::Empty,
        fault_class = field::Empty,
        fault_handled = field::Empty,
    );

    let mut response = next.run(request).instrument(span.clone()).await;
    response.headers_mut().insert(REQUEST_ID.clone(), id);

    let failed = record_outcome(&span, &response, started);
    span.in_scope(|| {
        if failed {
            warn!("request_failed");
        } else {
            info!("request_completed");
        }
    });

    response
}
