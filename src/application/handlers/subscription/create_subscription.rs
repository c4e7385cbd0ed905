//! CreateSubscriptionHandler - Command handler for starting a subscription.
//!
//! The validate-then-insert workflow behind the subscription form: the
//! member and plan must exist, a member with an unexpired subscription
//! cannot take a second one, and the end date is computed from the plan
//! duration.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, PlanId, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::{Clock, MemberRepository, PlanRepository, SubscriptionRepository};
use chrono::NaiveDate;

/// Command to start a subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub member_id: MemberId,
    pub plan_id: PlanId,
    /// First day of the period; defaults to today.
    pub start_date: Option<NaiveDate>,
}

/// Handler for subscription creation.
pub struct CreateSubscriptionHandler {
    members: Arc<dyn MemberRepository>,
    plans: Arc<dyn PlanRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateSubscriptionHandler {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        plans: Arc<dyn PlanRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            members,
            plans,
            subscriptions,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<Subscription, DomainError> {
        let member = self
            .members
            .find_by_id(&cmd.member_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MemberNotFound,
                    format!("No member with id {}", cmd.member_id),
                )
            })?;

        let plan = self.plans.find_by_id(&cmd.plan_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::PlanNotFound,
                format!("No plan with id {}", cmd.plan_id),
            )
        })?;

        let today = self.clock.local_now().date();

        if let Some(current) = self
            .subscriptions
            .find_current_by_member(&cmd.member_id)
            .await?
        {
            if !current.is_expired_on(today) {
                return Err(DomainError::new(
                    ErrorCode::SubscriptionAlreadyActive,
                    format!(
                        "{} already has a subscription running until {}",
                        member.name, current.end_date
                    ),
                ));
            }
        }

        let start_date = cmd.start_date.unwrap_or(today);
        let subscription = Subscription::start(
            SubscriptionId::new(),
            cmd.member_id,
            &plan,
            start_date,
            today,
        );

        self.subscriptions.save(&subscription).await?;
        info!(
            member = %member.name,
            plan = %plan.name,
            until = %subscription.end_date,
            "subscription created"
        );

        Ok(subscription)
    }
}
