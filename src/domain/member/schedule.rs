//! Schedule restrictions on member entry.

use serde::{Deserialize, Serialize};

/// Local hour (24-hour clock) from which mornings-only entry is refused.
///
/// Noon is the first rejected hour: 11:59 is admitted, 12:00 is not.
pub const MORNING_CUTOFF_HOUR: u32 = 12;

/// When a member is allowed to enter the gym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleRestriction {
    /// No restriction; any opening hour.
    Unrestricted,

    /// Entry only before local noon.
    MorningsOnly,
}

impl ScheduleRestriction {
    /// Returns true if a member with this restriction may enter at the
    /// given local hour (0-23).
    pub fn admits_hour(&self, hour: u32) -> bool {
        match self {
            ScheduleRestriction::Unrestricted => true,
            ScheduleRestriction::MorningsOnly => hour < MORNING_CUTOFF_HOUR,
        }
    }
}

impl Default for ScheduleRestriction {
    fn default() -> Self {
        ScheduleRestriction::Unrestricted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_admits_every_hour() {
        for hour in 0..24 {
            assert!(ScheduleRestriction::Unrestricted.admits_hour(hour));
        }
    }

    #[test]
    fn mornings_only_admits_before_noon() {
        assert!(ScheduleRestriction::MorningsOnly.admits_hour(0));
        assert!(ScheduleRestriction::MorningsOnly.admits_hour(11));
    }

    #[test]
    fn mornings_only_refuses_noon_and_after() {
        assert!(!ScheduleRestriction::MorningsOnly.admits_hour(12));
        assert!(!ScheduleRestriction::MorningsOnly.admits_hour(18));
        assert!(!ScheduleRestriction::MorningsOnly.admits_hour(23));
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&ScheduleRestriction::MorningsOnly).unwrap();
        assert_eq!(json, "\"mornings_only\"");
    }
}
