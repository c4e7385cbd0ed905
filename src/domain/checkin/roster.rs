//! Roster view - the snapshot the entry decision runs against.

use crate::domain::foundation::{MemberId, SubscriptionId, Timestamp};
use crate::domain::member::{MemberCode, ScheduleRestriction};
use crate::domain::subscription::SubscriptionStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One member joined with their current subscription.
///
/// This is what the Membership Store's "fetch members with active
/// subscriptions" interface returns: identity, plan details, schedule
/// flag, the period dates, and the stored status. The effective status is
/// derived by the caller; `entries_used` and `last_entry_at` are display
/// conveniences recomputed from entry records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub member_id: MemberId,
    pub member_name: String,
    pub code: MemberCode,
    pub schedule: ScheduleRestriction,
    pub subscription_id: SubscriptionId,
    pub plan_name: String,
    pub plan_price_cents: i64,
    pub entry_allowance: Option<u32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub entries_used: u32,
    pub last_entry_at: Option<Timestamp>,
}

impl RosterEntry {
    /// Effective status on the given date: lapsed periods read as
    /// `Expired` regardless of the stored status.
    pub fn effective_status(&self, on: NaiveDate) -> SubscriptionStatus {
        if self.end_date < on {
            SubscriptionStatus::Expired
        } else {
            self.status
        }
    }

    /// Visits left under the plan allowance, if the plan has one.
    pub fn entries_remaining(&self) -> Option<u32> {
        self.entry_allowance
            .map(|allowance| allowance.saturating_sub(self.entries_used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(end: NaiveDate, status: SubscriptionStatus) -> RosterEntry {
        RosterEntry {
            member_id: MemberId::new(),
            member_name: "Ana Torres".to_string(),
            code: MemberCode::new("123456").unwrap(),
            schedule: ScheduleRestriction::Unrestricted,
            subscription_id: SubscriptionId::new(),
            plan_name: "Monthly unlimited".to_string(),
            plan_price_cents: 4500,
            entry_allowance: None,
            start_date: date(2026, 1, 1),
            end_date: end,
            status,
            entries_used: 0,
            last_entry_at: None,
        }
    }

    #[test]
    fn lapsed_period_reads_expired_regardless_of_stored_status() {
        let e = entry(date(2026, 1, 31), SubscriptionStatus::Active);
        assert_eq!(
            e.effective_status(date(2026, 2, 1)),
            SubscriptionStatus::Expired
        );
    }

    #[test]
    fn stored_status_stands_inside_the_period() {
        let e = entry(date(2026, 1, 31), SubscriptionStatus::Active);
        assert_eq!(
            e.effective_status(date(2026, 1, 31)),
            SubscriptionStatus::Active
        );
    }

    #[test]
    fn entries_remaining_saturates_at_zero() {
        let mut e = entry(date(2026, 1, 31), SubscriptionStatus::Active);
        e.entry_allowance = Some(12);
        e.entries_used = 15;
        assert_eq!(e.entries_remaining(), Some(0));
    }

    #[test]
    fn unlimited_plans_have_no_remaining_count() {
        let e = entry(date(2026, 1, 31), SubscriptionStatus::Active);
        assert_eq!(e.entries_remaining(), None);
    }
}
