//! Axum routers for subscription and plan endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_plan, create_subscription, get_roster, list_plans, renew_subscription,
    SubscriptionsAppState,
};

/// Create the subscriptions API router.
///
/// # Routes
/// - `GET /` - the members-with-subscriptions roster
/// - `POST /` - start a subscription
/// - `POST /:id/renew` - renew a subscription
pub fn subscriptions_routes() -> Router<SubscriptionsAppState> {
    Router::new()
        .route("/", get(get_roster).post(create_subscription))
        .route("/:id/renew", post(renew_subscription))
}

/// Create the plans API router.
///
/// # Routes
/// - `GET /` - list plans
/// - `POST /` - create a plan
pub fn plans_routes() -> Router<SubscriptionsAppState> {
    Router::new().route("/", get(list_plans).post(create_plan))
}
