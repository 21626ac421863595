use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use super::response::SanitizedErrorResponse;
use crate::application::disclosure::DisclosurePolicy;
use crate::domain::{DeploymentMode, Fault};

/// Converts faults surfacing from a handler group into sanitized responses.
///
/// Holds no per-request state, so one instance is shared by every request in
/// the group.
#[derive(Debug, Clone)]
pub struct FaultInterceptor {
    policy: DisclosurePolicy,
    mode: DeploymentMode,
}

impl FaultInterceptor {
    pub fn new(policy: DisclosurePolicy, mode: DeploymentMode) -> Self {
        Self { policy, mode }
    }

    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    pub fn policy(&self) -> &DisclosurePolicy {
        &self.policy
    }

    /// Produce the terminal response for `fault` and mark it handled.
    ///
    /// Returns `None` when there is no fault or it was already handled, in
    /// which case the fault is left exactly as it was.
    pub fn intercept(&self, fault: Option<&mut Fault>) -> Option<SanitizedErrorResponse> {
        let fault = fault?;
        if fault.is_handled() {
            debug!(fault_class = fault.kind().label(), "fault already handled");
            return None;
        }

        let response = SanitizedErrorResponse::new(self.policy.disclose(fault, self.mode));
        fault.mark_handled();

        warn!(
            fault_class = fault.kind().label(),
            mode = %self.mode,
            status = response.status_code().as_u16(),
            "fault_intercepted"
        );

        Some(response)
    }

    /// Apply interception to a response produced by the wrapped handler.
    ///
    /// A response without a fault is returned untouched. Otherwise the
    /// sanitized response replaces it entirely, headers included, and the
    /// now-handled fault rides along so enclosing interceptors skip it.
    pub fn process(&self, mut response: Response) -> Response {
        let Some(mut fault) = response.extensions_mut().remove::<Fault>() else {
            return response;
        };

        match self.intercept(Some(&mut fault)) {
            Some(sanitized) => {
                let mut terminal = sanitized.into_response();
                terminal.extensions_mut().insert(fault);
                terminal
            }
            None => {
                response.extensions_mut().insert(fault);
                response
            }
        }
    }
}
