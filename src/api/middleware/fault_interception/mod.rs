//! Fault interception for opted-in handler groups
//!
//! Handlers signal failure by returning a [`Fault`](crate::domain::Fault);
//! the interceptor wrapped around their group swaps the response for a
//! sanitized `{"Message": ...}` body with status 400. Groups that are not
//! wrapped keep the host's default fault rendering.
//!
//! - interceptor.rs: the exactly-once interception logic
//! - middleware.rs: tower layer/service around a handler group
//! - response.rs: the sanitized wire response

pub mod interceptor;
pub mod middleware;
pub mod response;

pub use interceptor::FaultInterceptor;
pub use middleware::{FaultInterceptionLayer, FaultInterceptionService};
pub use response::{SanitizedErrorBody, SanitizedErrorResponse};

use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::errors::fault_from_panic;

/// Register `interceptor` on every route of `router`.
///
/// Panics raised by those handlers become unclassified faults and are
/// intercepted like any other fault.
pub fn intercept_faults<S>(router: Router<S>, interceptor: Arc<FaultInterceptor>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(fault_from_panic))
        .layer(FaultInterceptionLayer::new(interceptor))
}
