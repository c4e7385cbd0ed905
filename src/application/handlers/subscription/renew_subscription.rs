//! RenewSubscriptionHandler - Command handler for renewing a subscription.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, PlanId, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::{Clock, PlanRepository, SubscriptionRepository};

/// Command to renew a subscription.
#[derive(Debug, Clone)]
pub struct RenewSubscriptionCommand {
    pub subscription_id: SubscriptionId,
    /// Plan for the new period; defaults to the current plan.
    pub plan_id: Option<PlanId>,
}

/// Handler for subscription renewal.
///
/// The new period starts where the old one ends, or today if it has
/// already lapsed; the end date is recomputed from the plan duration.
pub struct RenewSubscriptionHandler {
    plans: Arc<dyn PlanRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
}

impl RenewSubscriptionHandler {
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            plans,
            subscriptions,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: RenewSubscriptionCommand,
    ) -> Result<Subscription, DomainError> {
        let mut subscription = self
            .subscriptions
            .find_by_id(&cmd.subscription_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SubscriptionNotFound,
                    format!("No subscription with id {}", cmd.subscription_id),
                )
            })?;

        let plan_id = cmd.plan_id.unwrap_or(subscription.plan_id);
        let plan = self.plans.find_by_id(&plan_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::PlanNotFound,
                format!("No plan with id {}", plan_id),
            )
        })?;

        let today = self.clock.local_now().date();
        subscription.renew(&plan, today)?;

        self.subscriptions.update(&subscription).await?;
        info!(
            subscription = %subscription.id,
            until = %subscription.end_date,
            "subscription renewed"
        );

        Ok(subscription)
    }
}
