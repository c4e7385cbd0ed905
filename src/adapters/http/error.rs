//! Shared HTTP error plumbing.
//!
//! The check-in endpoint has its own error mapping (its taxonomy is the
//! user-facing contract); every other area maps `DomainError` through
//! [`ApiError`].

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// Newtype mapping domain errors onto HTTP statuses.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::MemberNotFound
            | ErrorCode::SubscriptionNotFound
            | ErrorCode::PlanNotFound
            | ErrorCode::ProductNotFound
            | ErrorCode::ExerciseNotFound => StatusCode::NOT_FOUND,
            ErrorCode::SubscriptionAlreadyActive | ErrorCode::InvalidStateTransition => {
                StatusCode::CONFLICT
            }
            ErrorCode::InsufficientStock => StatusCode::CONFLICT,
            ErrorCode::CodeAllocationFailed
            | ErrorCode::DatabaseError
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message.clone());
        (status, Json(body)).into_response()
    }
}
