//! Subscription status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Stored subscription status.
///
/// The stored value is not authoritative on its own: a subscription whose
/// end date has passed is treated as `Expired` at read time regardless of
/// what is stored. See [`Subscription::effective_status`].
///
/// [`Subscription::effective_status`]: super::Subscription::effective_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Start date is in the future; no entry yet.
    Pending,

    /// Current paid period; entry allowed.
    Active,

    /// Period over; entry refused until renewal.
    Expired,
}

impl SubscriptionStatus {
    /// Returns true if this status admits the member at the door.
    pub fn admits_entry(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

impl StateMachine for SubscriptionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubscriptionStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Active)
                | (Pending, Expired)
            // From ACTIVE
                | (Active, Expired)
                | (Active, Active) // early renewal
            // From EXPIRED
                | (Expired, Active) // renewal
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubscriptionStatus::*;
        match self {
            Pending => vec![Active, Expired],
            Active => vec![Expired, Active],
            Expired => vec![Active],
        }
    }
}
