//! Subscription and plan handlers.

mod create_subscription;
mod manage_plans;
mod renew_subscription;
mod roster_query;

pub use create_subscription::{CreateSubscriptionCommand, CreateSubscriptionHandler};
pub use manage_plans::{CreatePlanCommand, CreatePlanHandler, ListPlansHandler};
pub use renew_subscription::{RenewSubscriptionCommand, RenewSubscriptionHandler};
pub use roster_query::{GetRosterHandler, RosterRow};
