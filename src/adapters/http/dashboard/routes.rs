//! Axum router for the dashboard endpoint.

use axum::{routing::get, Router};

use super::handlers::{get_overview, DashboardAppState};

/// Create the dashboard API router.
///
/// # Routes
/// - `GET /` - the card counters
pub fn dashboard_routes() -> Router<DashboardAppState> {
    Router::new().route("/", get(get_overview))
}
