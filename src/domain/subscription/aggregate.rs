//! Subscription aggregate entity.
//!
//! A Subscription ties one member to one plan for a date-bounded period.
//! Dates are calendar dates, not instants: expiry is decided by comparing
//! the end date against "today", never by time of day.
//!
//! # Design Decisions
//!
//! - **Derived expiry**: the stored status is advisory; any read that
//!   matters computes [`Subscription::effective_status`] against a
//!   reference date
//! - **Computed end date**: `end_date = start_date + plan.duration_days`,
//!   and the end date is the last admissible day (expiry requires
//!   `end_date < today`, strictly)

use crate::domain::foundation::{
    DomainError, ErrorCode, MemberId, PlanId, StateMachine, SubscriptionId, Timestamp,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Plan, SubscriptionStatus};

/// Subscription aggregate - one member's period on one plan.
///
/// # Invariants
///
/// - `start_date <= end_date`
/// - Status transitions follow the state machine rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for this subscription.
    pub id: SubscriptionId,

    /// Member who owns this subscription.
    pub member_id: MemberId,

    /// Plan this subscription was cut from.
    pub plan_id: PlanId,

    /// First day of the period.
    pub start_date: NaiveDate,

    /// Last admissible day of the period.
    pub end_date: NaiveDate,

    /// Stored status; see the derived-expiry rule.
    pub status: SubscriptionStatus,

    /// When the subscription was created.
    pub created_at: Timestamp,

    /// When the subscription was last updated.
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Starts a new subscription on the given plan.
    ///
    /// The end date is computed from the plan duration. Status is
    /// `Pending` when the start date is in the future, `Active` otherwise.
    pub fn start(
        id: SubscriptionId,
        member_id: MemberId,
        plan: &Plan,
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        let end_date = compute_end_date(start_date, plan.duration_days);
        let status = if start_date > today {
            SubscriptionStatus::Pending
        } else {
            SubscriptionStatus::Active
        };
        let now = Timestamp::now();
        Self {
            id,
            member_id,
            plan_id: plan.id,
            start_date,
            end_date,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Effective status on the given date.
    ///
    /// A subscription whose end date is strictly before `on` is `Expired`
    /// no matter what is stored. Otherwise the stored status stands.
    pub fn effective_status(&self, on: NaiveDate) -> SubscriptionStatus {
        if self.end_date < on {
            SubscriptionStatus::Expired
        } else {
            self.status
        }
    }

    /// Returns true if the subscription has lapsed as of the given date.
    pub fn is_expired_on(&self, on: NaiveDate) -> bool {
        self.effective_status(on) == SubscriptionStatus::Expired
    }

    /// Renews the subscription for another period on the given plan.
    ///
    /// The new period starts where the old one ends, or today if the old
    /// period has already lapsed; the end date is recomputed from the plan
    /// duration. A plan switch at renewal is allowed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the current effective status
    /// cannot become `Active`.
    pub fn renew(&mut self, plan: &Plan, today: NaiveDate) -> Result<(), DomainError> {
        let effective = self.effective_status(today);
        let next = effective
            .transition_to(SubscriptionStatus::Active)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Cannot renew a subscription that is {:?}", effective),
                )
            })?;

        let start = self.end_date.max(today);
        self.plan_id = plan.id;
        self.start_date = start;
        self.end_date = compute_end_date(start, plan.duration_days);
        self.status = next;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Marks a pending subscription active once its start date arrives.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the transition is not allowed.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(SubscriptionStatus::Active)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Cannot activate a subscription that is {:?}", self.status),
                )
            })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn compute_end_date(start: NaiveDate, duration_days: u32) -> NaiveDate {
    // Days::new cannot fail; the addition saturates far outside any
    // realistic plan duration.
    start
        .checked_add_days(Days::new(duration_days as u64))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly_plan() -> Plan {
        Plan::new(PlanId::new(), "Monthly unlimited", 4500, None, 30).unwrap()
    }

    #[test]
    fn start_computes_end_date_from_plan_duration() {
        let plan = monthly_plan();
        let sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 1, 1),
            date(2026, 1, 1),
        );

        assert_eq!(sub.end_date, date(2026, 1, 31));
        assert_eq!(sub.status, SubscriptionStatus::Active);
    }

    #[test]
    fn start_in_future_is_pending() {
        let plan = monthly_plan();
        let sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 2, 1),
            date(2026, 1, 15),
        );

        assert_eq!(sub.status, SubscriptionStatus::Pending);
    }

    #[test]
    fn effective_status_expires_past_end_date() {
        let plan = monthly_plan();
        let sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 1, 1),
            date(2026, 1, 1),
        );

        // Stored status is Active but the period has lapsed.
        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(
            sub.effective_status(date(2026, 2, 1)),
            SubscriptionStatus::Expired
        );
    }

    #[test]
    fn end_date_itself_is_still_admissible() {
        let plan = monthly_plan();
        let sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 1, 1),
            date(2026, 1, 1),
        );

        // Expiry requires end_date < today, strictly.
        assert_eq!(
            sub.effective_status(sub.end_date),
            SubscriptionStatus::Active
        );
    }

    #[test]
    fn renew_before_lapse_extends_from_end_date() {
        let plan = monthly_plan();
        let mut sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 1, 1),
            date(2026, 1, 1),
        );

        sub.renew(&plan, date(2026, 1, 20)).unwrap();

        assert_eq!(sub.start_date, date(2026, 1, 31));
        assert_eq!(sub.end_date, date(2026, 3, 2));
        assert_eq!(sub.status, SubscriptionStatus::Active);
    }

    #[test]
    fn renew_after_lapse_restarts_today() {
        let plan = monthly_plan();
        let mut sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 1, 1),
            date(2026, 1, 1),
        );

        sub.renew(&plan, date(2026, 3, 10)).unwrap();

        assert_eq!(sub.start_date, date(2026, 3, 10));
        assert_eq!(sub.end_date, date(2026, 4, 9));
        assert_eq!(sub.status, SubscriptionStatus::Active);
    }

    #[test]
    fn renew_can_switch_plans() {
        let monthly = monthly_plan();
        let quarterly = Plan::new(PlanId::new(), "Quarterly", 12000, None, 90).unwrap();
        let mut sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &monthly,
            date(2026, 1, 1),
            date(2026, 1, 1),
        );

        sub.renew(&quarterly, date(2026, 3, 10)).unwrap();

        assert_eq!(sub.plan_id, quarterly.id);
        assert_eq!(sub.end_date, date(2026, 6, 8));
    }

    #[test]
    fn activate_moves_pending_to_active() {
        let plan = monthly_plan();
        let mut sub = Subscription::start(
            SubscriptionId::new(),
            MemberId::new(),
            &plan,
            date(2026, 2, 1),
            date(2026, 1, 15),
        );

        assert_eq!(sub.status, SubscriptionStatus::Pending);
        sub.activate().unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Active);
    }
}
