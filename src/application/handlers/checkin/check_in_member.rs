//! CheckInHandler - the check-in workflow.
//!
//! Sanitize the presented code, capture the moment once, snapshot the
//! roster, run the pure entry decision, and append the entry record if
//! admitted. Every earlier failure leaves the store untouched.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::checkin::{evaluate_entry, CheckInError, CheckInMoment, EntryRecord};
use crate::domain::foundation::{EntryId, MemberId, Timestamp};
use crate::domain::member::MemberCode;
use crate::ports::{Clock, EntryRepository, RosterReader};

/// Command to check a member in.
#[derive(Debug, Clone)]
pub struct CheckInCommand {
    /// Raw code as typed at the front desk; sanitized here.
    pub code: String,
}

/// Result of a successful check-in.
#[derive(Debug, Clone)]
pub struct CheckInResult {
    /// The new entry record's id.
    pub entry_id: EntryId,

    /// Member admitted.
    pub member_id: MemberId,

    /// Name for the front-desk display.
    pub member_name: String,

    /// The instant persisted on the record, UTC.
    pub recorded_at: Timestamp,

    /// `HH:MM` local time for the "last entry" display.
    pub display_time: String,
}

/// Handler for the check-in workflow.
///
/// Stateless between invocations: each call is a pure function of the
/// code, the roster snapshot, and the clock, plus exactly one append on
/// admission.
pub struct CheckInHandler {
    roster: Arc<dyn RosterReader>,
    entries: Arc<dyn EntryRepository>,
    clock: Arc<dyn Clock>,
}

impl CheckInHandler {
    pub fn new(
        roster: Arc<dyn RosterReader>,
        entries: Arc<dyn EntryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            roster,
            entries,
            clock,
        }
    }

    pub async fn handle(&self, cmd: CheckInCommand) -> Result<CheckInResult, CheckInError> {
        let code = MemberCode::sanitize(&cmd.code);
        let moment = CheckInMoment::new(self.clock.now(), self.clock.local_now());

        let roster = self
            .roster
            .fetch_active()
            .await
            .map_err(|e| CheckInError::LookupFailure(e.to_string()))?;

        let admission = match evaluate_entry(&code, &roster, &moment) {
            Ok(admission) => admission,
            Err(rejection) => {
                info!(code = %code, reason = %rejection, "entry rejected");
                return Err(rejection);
            }
        };

        let record = EntryRecord::new(
            admission.member_id,
            admission.subscription_id,
            admission.recorded_at,
        );
        self.entries.append(&record).await.map_err(|e| {
            warn!(member = %admission.member_name, error = %e, "entry record write failed");
            CheckInError::PersistenceFailure(e.to_string())
        })?;

        info!(
            member = %admission.member_name,
            time = %admission.display_time,
            "entry recorded"
        );

        Ok(CheckInResult {
            entry_id: record.id,
            member_id: admission.member_id,
            member_name: admission.member_name,
            recorded_at: admission.recorded_at,
            display_time: admission.display_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::domain::checkin::RosterEntry;
    use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId};
    use crate::domain::member::ScheduleRestriction;
    use crate::domain::subscription::SubscriptionStatus;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════

    struct MockRosterReader {
        roster: Vec<RosterEntry>,
        fail: bool,
    }

    impl MockRosterReader {
        fn with(roster: Vec<RosterEntry>) -> Self {
            Self { roster, fail: false }
        }

        fn failing() -> Self {
            Self {
                roster: vec![],
                fail: true,
            }
        }
    }

    #[async_trait]
    impl RosterReader for MockRosterReader {
        async fn fetch_active(&self) -> Result<Vec<RosterEntry>, DomainError> {
            if self.fail {
                return Err(DomainError::database("connection reset"));
            }
            Ok(self.roster.clone())
        }
    }

    struct MockEntryRepository {
        records: Mutex<Vec<EntryRecord>>,
        fail_append: bool,
    }

    impl MockEntryRepository {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_append: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_append: true,
            }
        }

        fn recorded(&self) -> Vec<EntryRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EntryRepository for MockEntryRepository {
        async fn append(&self, record: &EntryRecord) -> Result<(), DomainError> {
            if self.fail_append {
                return Err(DomainError::new(ErrorCode::DatabaseError, "insert failed"));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn recent_for_member(
            &self,
            member_id: &MemberId,
            limit: u32,
        ) -> Result<Vec<EntryRecord>, DomainError> {
            let mut records: Vec<_> = self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| &r.member_id == member_id)
                .cloned()
                .collect();
            records.reverse();
            records.truncate(limit as usize);
            Ok(records)
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Clock pinned to 2026-03-14 14:05 local.
    fn afternoon_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::at(date(2026, 3, 14).and_hms_opt(14, 5, 0).unwrap()))
    }

    fn morning_clock(h: u32, m: u32) -> Arc<FixedClock> {
        Arc::new(FixedClock::at(date(2026, 3, 14).and_hms_opt(h, m, 0).unwrap()))
    }

    fn roster_entry(code: &str, schedule: ScheduleRestriction, end: NaiveDate) -> RosterEntry {
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
            end_date: end,
            status: SubscriptionStatus::Active,
            entries_used: 0,
            last_entry_at: None,
        }
    }

    fn handler(
        roster: Vec<RosterEntry>,
        entries: Arc<MockEntryRepository>,
        clock: Arc<FixedClock>,
    ) -> CheckInHandler {
        CheckInHandler::new(Arc::new(MockRosterReader::with(roster)), entries, clock)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn admits_and_writes_exactly_one_record() {
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];
        let h = handler(roster.clone(), entries.clone(), afternoon_clock());

        let result = h
            .handle(CheckInCommand {
                code: "123456".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.member_name, "Ana Torres");
        assert_eq!(result.display_time, "14:05");

        let recorded = entries.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].member_id, roster[0].member_id);
        assert_eq!(recorded[0].subscription_id, roster[0].subscription_id);
        assert_eq!(recorded[0].recorded_at, result.recorded_at);
    }

    #[tokio::test]
    async fn sanitizes_noisy_input_before_deciding() {
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];
        let h = handler(roster, entries.clone(), afternoon_clock());

        let result = h
            .handle(CheckInCommand {
                code: " 12-34-56 ".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(entries.recorded().len(), 1);
    }

    #[tokio::test]
    async fn two_immediate_check_ins_write_two_records() {
        // No dedup window: same valid code twice means two visits.
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];
        let h = handler(roster, entries.clone(), afternoon_clock());

        let cmd = CheckInCommand {
            code: "123456".to_string(),
        };
        h.handle(cmd.clone()).await.unwrap();
        h.handle(cmd).await.unwrap();

        assert_eq!(entries.recorded().len(), 2);
    }

    #[tokio::test]
    async fn mornings_only_admitted_just_before_noon() {
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::MorningsOnly,
            date(2026, 3, 15),
        )];
        let h = handler(roster, entries.clone(), morning_clock(11, 59));

        let result = h
            .handle(CheckInCommand {
                code: "123456".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.display_time, "11:59");
        assert_eq!(entries.recorded().len(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Rejection Tests - no store write
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn malformed_code_is_rejected_without_write() {
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];
        let h = handler(roster, entries.clone(), afternoon_clock());

        // "12a456" sanitizes to "12456": five digits.
        let result = h
            .handle(CheckInCommand {
                code: "12a456".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CheckInError::InvalidCodeFormat);
        assert!(entries.recorded().is_empty());
    }

    #[tokio::test]
    async fn unknown_code_is_rejected_without_write() {
        let entries = Arc::new(MockEntryRepository::new());
        let h = handler(vec![], entries.clone(), afternoon_clock());

        let result = h
            .handle(CheckInCommand {
                code: "654321".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckInError::MemberNotFound { .. }
        ));
        assert!(entries.recorded().is_empty());
    }

    #[tokio::test]
    async fn expired_yesterday_is_rejected_despite_stored_status() {
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 13), // yesterday relative to the pinned clock
        )];
        let h = handler(roster, entries.clone(), afternoon_clock());

        let result = h
            .handle(CheckInCommand {
                code: "123456".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckInError::SubscriptionExpired { .. }
        ));
        assert!(entries.recorded().is_empty());
    }

    #[tokio::test]
    async fn mornings_only_rejected_at_noon_sharp() {
        let entries = Arc::new(MockEntryRepository::new());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::MorningsOnly,
            date(2026, 3, 15),
        )];
        let h = handler(roster, entries.clone(), morning_clock(12, 0));

        let result = h
            .handle(CheckInCommand {
                code: "123456".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckInError::OutsideAllowedHours { .. }
        ));
        assert!(entries.recorded().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Infrastructure Failure Tests
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn roster_fetch_failure_is_infrastructure() {
        let entries = Arc::new(MockEntryRepository::new());
        let h = CheckInHandler::new(
            Arc::new(MockRosterReader::failing()),
            entries.clone(),
            afternoon_clock(),
        );

        let result = h
            .handle(CheckInCommand {
                code: "123456".to_string(),
            })
            .await;

        let err = result.unwrap_err();
        assert!(err.is_infrastructure());
        assert!(matches!(err, CheckInError::LookupFailure(_)));
    }

    #[tokio::test]
    async fn append_failure_surfaces_as_persistence_failure() {
        let entries = Arc::new(MockEntryRepository::failing());
        let roster = vec![roster_entry(
            "123456",
            ScheduleRestriction::Unrestricted,
            date(2026, 3, 15),
        )];
        let h = handler(roster, entries, afternoon_clock());

        let result = h
            .handle(CheckInCommand {
                code: "123456".to_string(),
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, CheckInError::PersistenceFailure(_)));
        assert!(err.is_infrastructure());
    }
}
