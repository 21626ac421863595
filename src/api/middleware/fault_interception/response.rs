use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wire body: a JSON object with the single key `Message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedErrorBody {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Terminal response written for an intercepted fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedErrorResponse {
    message: String,
}

impl SanitizedErrorResponse {
    /// Client-facing and not worth retrying verbatim, whatever the fault was
    pub const STATUS: StatusCode = StatusCode::BAD_REQUEST;
    pub const CONTENT_TYPE: &'static str = "application/json";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> StatusCode {
        Self::STATUS
    }

    pub fn content_type(&self) -> &'static str {
        Self::CONTENT_TYPE
    }
}

impl IntoResponse for SanitizedErrorResponse {
    fn into_response(self) -> Response {
        // Encoding a struct with one string field cannot fail
        let body = SanitizedErrorBody {
            message: self.message,
        };
        (Self::STATUS, Json(body)).into_response()
    }
}
