use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// The envelope carried an `apiVersion` this crate does not speak.
    UnsupportedVersion(String),
    /// Decoded widget identifiers did not match the ones a grader declares.
    WidgetMismatch(String),
    /// A grader produced something other than a pass/fail pair or a dict with `ok`.
    MalformedOutcome(String),
    Json(serde_json::Error),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::UnsupportedVersion(version) => {
                write!(f, "Unsupported API version: {version}")
            }
            AppError::WidgetMismatch(msg) => write!(f, "Widget mismatch: {msg}"),
            AppError::MalformedOutcome(msg) => {
                write!(f, "The grader function response was not formatted correctly: {msg}")
            }
            AppError::Json(err) => write!(f, "Invalid JSON: {err}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Version and grader problems are integration bugs, not student errors.
            AppError::UnsupportedVersion(_)
            | AppError::WidgetMismatch(_)
            | AppError::MalformedOutcome(_)
            | AppError::Json(_)
            | AppError::Internal(_) => {
                tracing::error!("Request failed: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
