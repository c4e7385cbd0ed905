//! Axum router for member endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_member, list_members, register_member, update_member, MembersAppState};

/// Create the members API router.
///
/// # Routes
/// - `POST /` - register a member (code is allocated server-side)
/// - `GET /` - list members
/// - `GET /:id` - fetch one member
/// - `PUT /:id` - update a member
pub fn members_routes() -> Router<MembersAppState> {
    Router::new()
        .route("/", get(list_members).post(register_member))
        .route("/:id", get(get_member).put(update_member))
}
