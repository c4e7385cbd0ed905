//! Clock adapters.
//!
//! `SystemClock` reads the host clock; `FixedClock` pins "now" so tests
//! are deterministic. Both are real adapters of the same port; the fixed
//! one also backs manual testing against seeded data.

use chrono::{Local, NaiveDateTime, Utc};

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Production clock: UTC instant plus the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test clock pinned to one wall-clock instant.
///
/// The UTC instant is derived from the pinned wall clock as if the gym
/// ran on UTC; tests that care about the local/UTC offset should compare
/// against [`FixedClock::at`]'s argument, not the host timezone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    local: NaiveDateTime,
}

impl FixedClock {
    /// Pins the clock to the given wall-clock date and time.
    pub fn at(local: NaiveDateTime) -> Self {
        Self { local }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(self.local.and_utc())
    }

    fn local_now(&self) -> NaiveDateTime {
        self.local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a <= b);
    }

    #[test]
    fn fixed_clock_never_moves() {
        let local = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(11, 59, 0)
            .unwrap();
        let clock = FixedClock::at(local);

        assert_eq!(clock.local_now(), local);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn fixed_clock_pair_is_consistent() {
        let local = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let clock = FixedClock::at(local);

        assert_eq!(clock.now().as_datetime().naive_utc(), local);
    }
}
