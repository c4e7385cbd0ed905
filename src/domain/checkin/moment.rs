//! The instant a check-in attempt happens at.

use crate::domain::foundation::Timestamp;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// The (UTC instant, local wall-clock) pair captured once per attempt.
///
/// The durable entry record stores the UTC instant; the expiry and
/// schedule rules read the wall clock the member sees at the door. Both
/// come from the same [`Clock`] read so a single attempt never straddles
/// two different "now"s.
///
/// [`Clock`]: crate::ports::Clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInMoment {
    /// The instant to persist, UTC.
    pub utc: Timestamp,

    /// The wall clock at the gym.
    pub local: NaiveDateTime,
}

impl CheckInMoment {
    /// Creates a moment from an already-captured pair.
    pub fn new(utc: Timestamp, local: NaiveDateTime) -> Self {
        Self { utc, local }
    }

    /// Local calendar date, used for the date-only expiry comparison.
    pub fn local_date(&self) -> NaiveDate {
        self.local.date()
    }

    /// Local hour (0-23), used for the schedule check.
    pub fn local_hour(&self) -> u32 {
        self.local.hour()
    }

    /// Zero-padded 24-hour `HH:MM` display string.
    pub fn display_time(&self) -> String {
        self.local.format("%H:%M").to_string()
    }
}
