//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and a JSON body whose `type` field
//! is a stable discriminant clients can switch on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use qatrack_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Release attempted by someone other than the holder.
    #[error("Not owner: {0}")]
    NotOwner(String),

    #[error("Already assigned: {0}")]
    AlreadyAssigned(String),

    #[error("Disabled: {0}")]
    Disabled(String),

    /// Missing or malformed input.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No caller identity on a caller-scoped route.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Store unreachable or over its deadline.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) | Self::NotOwner(_) => StatusCode::FORBIDDEN,
            Self::AlreadyAssigned(_) | Self::Disabled(_) | Self::Conflict(_) => {
                StatusCode::CONFLICT
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error type discriminant for client-side handling.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotOwner(_) => "NOT_OWNER",
            Self::AlreadyAssigned(_) => "ALREADY_ASSIGNED",
            Self::Disabled(_) => "DISABLED",
            Self::BadRequest(_) => "INVALID_INPUT",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::ServiceUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::NotFound(m)
            | Self::Forbidden(m)
            | Self::NotOwner(m)
            | Self::AlreadyAssigned(m)
            | Self::Disabled(m)
            | Self::BadRequest(m)
            | Self::Conflict(m)
            | Self::Unauthenticated(m)
            | Self::ServiceUnavailable(m)
            | Self::Internal(m) => m,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    status: u16,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), "{self}");
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            error_type: self.kind(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Forbidden(msg) => Self::Forbidden(msg),
            CoreError::NotOwner(msg) => Self::NotOwner(msg),
            CoreError::AlreadyAssigned(msg) => Self::AlreadyAssigned(msg),
            CoreError::Disabled(msg) => Self::Disabled(msg),
            CoreError::BackendUnavailable(msg) => Self::ServiceUnavailable(msg),
            CoreError::InvalidInput(msg) => Self::BadRequest(msg),
            CoreError::Conflict(msg) => Self::Conflict(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}
