//! Subscriptions HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreatePlanRequest, CreateSubscriptionRequest, PlanListResponse, PlanResponse,
    RenewSubscriptionRequest, RosterResponse, RosterRowResponse, SubscriptionResponse,
};
pub use handlers::SubscriptionsAppState;
pub use routes::{plans_routes, subscriptions_routes};
