//! Axum router for the check-in endpoint.

use axum::{routing::post, Router};

use super::handlers::{check_in, CheckInAppState};

/// Create the check-in API router.
///
/// # Routes
/// - `POST /` - validate a membership code and record the visit
pub fn checkin_routes() -> Router<CheckInAppState> {
    Router::new().route("/", post(check_in))
}
