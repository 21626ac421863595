use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use crate::domain::Fault;

/// A fault leaves its handler as a bare 500 carrying the fault in the
/// response extensions. Whoever sits above the handler decides what the
/// client actually sees: a fault interceptor for opted-in handler groups,
/// the host default rendering everywhere else.
impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Turn a handler panic into an unclassified fault response
pub fn fault_from_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    Fault::unclassified(detail).into_response()
}
