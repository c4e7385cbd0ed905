//! HTTP handlers for the check-in endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::checkin::{CheckInCommand, CheckInHandler};
use crate::domain::checkin::CheckInError;
use crate::ports::{Clock, EntryRepository, RosterReader};

use super::dto::{CheckInRequest, CheckInResponse};

/// Shared state for the check-in endpoint.
#[derive(Clone)]
pub struct CheckInAppState {
    pub roster_reader: Arc<dyn RosterReader>,
    pub entry_repository: Arc<dyn EntryRepository>,
    pub clock: Arc<dyn Clock>,
}

impl CheckInAppState {
    pub fn check_in_handler(&self) -> CheckInHandler {
        CheckInHandler::new(
            self.roster_reader.clone(),
            self.entry_repository.clone(),
            self.clock.clone(),
        )
    }
}

/// POST /api/checkin - validate a code and record the visit
pub async fn check_in(
    State(state): State<CheckInAppState>,
    Json(request): Json<CheckInRequest>,
) -> Result<impl IntoResponse, CheckInApiError> {
    let handler = state.check_in_handler();
    let result = handler
        .handle(CheckInCommand { code: request.code })
        .await?;

    Ok(Json(CheckInResponse::from(result)))
}

/// Newtype mapping check-in outcomes onto HTTP statuses.
pub struct CheckInApiError(CheckInError);

impl From<CheckInError> for CheckInApiError {
    fn from(err: CheckInError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckInApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            CheckInError::InvalidCodeFormat => (StatusCode::BAD_REQUEST, "INVALID_CODE_FORMAT"),
            CheckInError::MemberNotFound { .. } => (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND"),
            CheckInError::SubscriptionExpired { .. } => {
                (StatusCode::PAYMENT_REQUIRED, "SUBSCRIPTION_EXPIRED")
            }
            CheckInError::OutsideAllowedHours { .. } => {
                (StatusCode::FORBIDDEN, "OUTSIDE_ALLOWED_HOURS")
            }
            CheckInError::LookupFailure(_) | CheckInError::PersistenceFailure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn validation_errors_map_to_client_statuses() {
        let cases = [
            (
                CheckInApiError(CheckInError::InvalidCodeFormat),
                StatusCode::BAD_REQUEST,
            ),
            (
                CheckInApiError(CheckInError::member_not_found("123456")),
                StatusCode::NOT_FOUND,
            ),
            (
                CheckInApiError(CheckInError::subscription_expired(
                    "Ana",
                    NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                )),
                StatusCode::PAYMENT_REQUIRED,
            ),
            (
                CheckInApiError(CheckInError::outside_allowed_hours("Ana")),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        let err = CheckInApiError(CheckInError::PersistenceFailure("insert failed".into()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
