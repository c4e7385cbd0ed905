//! Clock port - the injected source of "now".
//!
//! The entry rules depend on the current date and local hour, so time is
//! a capability rather than an ambient global. Tests pin the clock to a
//! fixed instant; production wires the system clock.

use chrono::NaiveDateTime;

use crate::domain::foundation::Timestamp;

/// Source of the current time.
///
/// `now` is the UTC instant persisted on entry records; `local_now` is
/// the wall clock at the gym, which the expiry and schedule rules read.
/// Implementations must return a consistent pair: both methods observe
/// the same underlying instant.
pub trait Clock: Send + Sync {
    /// The current instant, UTC.
    fn now(&self) -> Timestamp;

    /// The current wall-clock date and time at the gym.
    fn local_now(&self) -> NaiveDateTime;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_object_safe() {
        fn _accepts_dyn(_clock: &dyn Clock) {}
    }
}
