//! Entry validation - the admission decision.
//!
//! One pure function decides every check-in. It takes the sanitized code,
//! a roster snapshot, and the captured moment, and returns either an
//! [`Admission`] or the first failing rule. It performs no I/O; the write
//! that records an admitted visit is a separate effect step in the
//! application layer, so the rule set has a single source of truth.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. code length (no lookup happens for malformed codes)
//! 2. exact roster lookup
//! 3. derived expiry, date-only and strict
//! 4. schedule restriction against the local hour
//! 5. admit, stamping the moment captured once by the caller

use crate::domain::member::MemberCode;
use crate::domain::foundation::{MemberId, SubscriptionId, Timestamp};

use super::{CheckInError, CheckInMoment, RosterEntry};

/// A granted admission, ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    /// Member being admitted.
    pub member_id: MemberId,

    /// Name for the front-desk display.
    pub member_name: String,

    /// Subscription the visit counts against.
    pub subscription_id: SubscriptionId,

    /// The instant to persist on the entry record, UTC.
    pub recorded_at: Timestamp,

    /// `HH:MM` local time for the "last entry" display.
    pub display_time: String,
}

/// Decides admission for a sanitized code at the captured moment.
///
/// `code` must already be sanitized (non-digits stripped, truncated to 6
/// characters); the length is re-validated here so the rule set stays
/// self-contained. The roster is the current members-with-subscriptions
/// snapshot; `moment` is read exactly once per attempt.
///
/// # Errors
///
/// The first failing rule, as a [`CheckInError`]. All failures are pure
/// decisions; nothing has been written when this returns `Err`.
pub fn evaluate_entry(
    code: &str,
    roster: &[RosterEntry],
    moment: &CheckInMoment,
) -> Result<Admission, CheckInError> {
    if code.len() != MemberCode::LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(CheckInError::InvalidCodeFormat);
    }

    let entry = roster
        .iter()
        .find(|e| e.code.as_str() == code)
        .ok_or_else(|| CheckInError::member_not_found(code))?;

    if entry.end_date < moment.local_date() {
        return Err(CheckInError::subscription_expired(
            entry.member_name.clone(),
            entry.end_date,
        ));
    }

    if !entry.schedule.admits_hour(moment.local_hour()) {
        return Err(CheckInError::outside_allowed_hours(
            entry.member_name.clone(),
        ));
    }

    Ok(Admission {
        member_id: entry.member_id,
        member_name: entry.member_name.clone(),
        subscription_id: entry.subscription_id,
        recorded_at: moment.utc,
        display_time: moment.display_time(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::ScheduleRestriction;
    use crate::domain::subscription::SubscriptionStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn moment(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> CheckInMoment {
        let local = date(y, mo, d).and_hms_opt(h, mi, 0).unwrap();
        CheckInMoment::new(Timestamp::from_datetime(local.and_utc()), local)
    }

    fn roster_entry(
        code: &str,
        schedule: ScheduleRestriction,
        end_date: NaiveDate,
    ) -> RosterEntry {
        RosterEntry {
            member_id: MemberId::new(),
            member_name: "Ana Torres".to_string(),
            code: MemberCode::new(code).unwrap(),
            schedule,
            subscription_id: SubscriptionId::new(),
            plan_name: "Monthly unlimited".to_string(),
            plan_price_cents: 4500,
            entry_allowance: None,
            start_date: date(2026, 3, 1),
            end_date,
            status: SubscriptionStatus::Active,
            entries_used: 3,
            last_entry_at: None,
        }
    }

    // Check-in happens on 2026-03-14 in these tests.

    #[test]
    fn admits_valid_member_with_current_subscription() {
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15), // tomorrow
        )];
        let moment = moment(2026, 3, 14, 14, 5);

        let admission = evaluate_entry("123456", &roster, &moment).unwrap();

        assert_eq!(admission.member_name, "Ana Torres");
        assert_eq!(admission.display_time, "14:05");
        assert_eq!(admission.recorded_at, moment.utc);
        assert_eq!(admission.subscription_id, roster[0].subscription_id);
    }

    #[test]
    fn rejects_short_code_without_lookup() {
        // "12a456" sanitizes to "12456": five digits, so the length rule
        // fires and the roster is never consulted.
        let result = evaluate_entry("12456", &[], &moment(2026, 3, 14, 10, 0));
        assert_eq!(result.unwrap_err(), CheckInError::InvalidCodeFormat);
    }

    #[test]
    fn rejects_non_digit_code() {
        let result = evaluate_entry("12a456", &[], &moment(2026, 3, 14, 10, 0));
        assert_eq!(result.unwrap_err(), CheckInError::InvalidCodeFormat);
    }

    #[test]
    fn rejects_unknown_code() {
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];

        let result = evaluate_entry("654321", &roster, &moment(2026, 3, 14, 10, 0));
        assert_eq!(
            result.unwrap_err(),
            CheckInError::member_not_found("654321")
        );
    }

    #[test]
    fn code_match_is_exact() {
        let roster = vec![roster_entry(
            "012345",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];

        // "12345" is not padded or coerced into "012345"; it fails the
        // length rule before any lookup.
        let result = evaluate_entry("12345", &roster, &moment(2026, 3, 14, 10, 0));
        assert_eq!(result.unwrap_err(), CheckInError::InvalidCodeFormat);
    }

    #[test]
    fn rejects_subscription_that_ended_yesterday_despite_stored_status() {
        let mut entry = roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 13), // yesterday
        );
        entry.status = SubscriptionStatus::Active; // stored value lies

        let result = evaluate_entry("123456", &[entry], &moment(2026, 3, 14, 10, 0));
        assert_eq!(
            result.unwrap_err(),
            CheckInError::subscription_expired("Ana Torres", date(2026, 3, 13))
        );
    }

    #[test]
    fn admits_on_the_end_date_itself() {
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 14), // today
        )];

        assert!(evaluate_entry("123456", &roster, &moment(2026, 3, 14, 10, 0)).is_ok());
    }

    #[test]
    fn mornings_only_admitted_at_11_59() {
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::MorningsOnly,
            date(2026, 3, 15),
        )];

        let admission =
            evaluate_entry("123456", &roster, &moment(2026, 3, 14, 11, 59)).unwrap();
        assert_eq!(admission.display_time, "11:59");
    }

    #[test]
    fn mornings_only_rejected_at_12_00() {
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::MorningsOnly,
            date(2026, 3, 15),
        )];

        let result = evaluate_entry("123456", &roster, &moment(2026, 3, 14, 12, 0));
        assert_eq!(
            result.unwrap_err(),
            CheckInError::outside_allowed_hours("Ana Torres")
        );
    }

    #[test]
    fn expiry_is_checked_before_schedule() {
        // Expired and outside hours: the expiry rule wins.
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::MorningsOnly,
            date(2026, 3, 13),
        )];

        let result = evaluate_entry("123456", &roster, &moment(2026, 3, 14, 15, 0));
        assert!(matches!(
            result.unwrap_err(),
            CheckInError::SubscriptionExpired { .. }
        ));
    }

    #[test]
    fn admission_stamps_the_captured_moment_exactly() {
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];
        let m = moment(2026, 3, 14, 9, 30);

        let admission = evaluate_entry("123456", &roster, &m).unwrap();
        assert_eq!(admission.recorded_at, m.utc);
        assert_eq!(admission.display_time, "09:30");
    }
}
