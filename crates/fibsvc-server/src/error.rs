//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use fibsvc_core::FibError;

use crate::dto::ErrorResponse;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Domain or validation error from the core.
    #[error(transparent)]
    Fib(#[from] FibError),

    /// Path, query or body could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Request is valid but above a configured bound.
    #[error("{what} {value} exceeds the configured maximum of {max}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        max: u64,
    },

    /// Worker task failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Fib(FibError::Blacklisted(_) | FibError::PageExceedsTotalPages { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Fib(
                FibError::InvalidIndex(_)
                | FibError::InvalidPageSize(_)
                | FibError::InvalidPageNumber(_)
                | FibError::InvalidTotalCount(_),
            )
            | Self::InvalidInput(_)
            | Self::LimitExceeded { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Fib(FibError::Store(_)) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Fib(err) => err.code(),
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::LimitExceeded { .. } => "LIMIT_EXCEEDED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            detail: self.to_string(),
            code: self.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
