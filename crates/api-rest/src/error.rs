//! HTTP error type and the mapping from core errors to status codes.
//!
//! Every handler returns `Result<_, ApiError>`; this is the single place where
//! failures become HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hms_core::HmsError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, missing field or rejected by a catalogue rule.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate code, or a record still referenced elsewhere.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<HmsError> for ApiError {
    fn from(err: HmsError) -> Self {
        match err {
            HmsError::InvalidInput(msg) => ApiError::BadRequest(msg),
            e @ HmsError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            e @ (HmsError::DuplicateCode { .. } | HmsError::InUse { .. }) => {
                ApiError::Conflict(e.to_string())
            }
            e => ApiError::Internal(e.to_string()),
        }
    }
}
