//! HTTP DTOs for subscription and plan endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::subscription::RosterRow;
use crate::domain::member::ScheduleRestriction;
use crate::domain::subscription::{Plan, Subscription, SubscriptionStatus};

/// Request to start a subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub member_id: String,
    pub plan_id: String,
    /// First day of the period; defaults to today.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// Request to renew a subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct RenewSubscriptionRequest {
    /// Plan for the new period; defaults to the current plan.
    #[serde(default)]
    pub plan_id: Option<String>,
}

/// Request to create a plan.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub entry_allowance: Option<u32>,
    pub duration_days: u32,
}

/// Subscription details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub member_id: String,
    pub plan_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id.to_string(),
            member_id: subscription.member_id.to_string(),
            plan_id: subscription.plan_id.to_string(),
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            status: subscription.status,
        }
    }
}

/// Plan details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub entry_allowance: Option<u32>,
    pub duration_days: u32,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name,
            price_cents: plan.price_cents,
            entry_allowance: plan.entry_allowance,
            duration_days: plan.duration_days,
        }
    }
}

/// One roster row: member joined with their current subscription.
#[derive(Debug, Clone, Serialize)]
pub struct RosterRowResponse {
    pub member_id: String,
    pub member_name: String,
    pub code: String,
    pub schedule: ScheduleRestriction,
    pub subscription_id: String,
    pub plan_name: String,
    pub plan_price_cents: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Derived against today; lapsed periods always read `expired`.
    pub status: SubscriptionStatus,
    pub entries_remaining: Option<u32>,
    pub last_entry_at: Option<String>,
}

impl From<RosterRow> for RosterRowResponse {
    fn from(row: RosterRow) -> Self {
        let entries_remaining = row.entry.entries_remaining();
        Self {
            member_id: row.entry.member_id.to_string(),
            member_name: row.entry.member_name,
            code: row.entry.code.to_string(),
            schedule: row.entry.schedule,
            subscription_id: row.entry.subscription_id.to_string(),
            plan_name: row.entry.plan_name,
            plan_price_cents: row.entry.plan_price_cents,
            start_date: row.entry.start_date,
            end_date: row.entry.end_date,
            status: row.effective_status,
            entries_remaining,
            last_entry_at: row.entry.last_entry_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response listing the roster.
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub roster: Vec<RosterRowResponse>,
}

/// Response listing plans.
#[derive(Debug, Clone, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<PlanResponse>,
}
