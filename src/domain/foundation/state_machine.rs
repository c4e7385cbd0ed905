//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across entity lifecycle statuses (Subscription, etc.).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SubscriptionStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Pending, Active) |
///             (Active, Expired) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Pending => vec![Active, Expired],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let new_status = current_status.transition_to(SubscriptionStatus::Active)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Open,
        Settled,
        Voided,
    }

    impl StateMachine for TestStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use TestStatus::*;
            matches!((self, target), (Open, Settled) | (Open, Voided))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use TestStatus::*;
            match self {
                Open => vec![Settled, Voided],
                Settled => vec![],
                Voided => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let status = TestStatus::Open;
        let result = status.transition_to(TestStatus::Settled);
        assert_eq!(result, Ok(TestStatus::Settled));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let status = TestStatus::Settled;
        let result = status.transition_to(TestStatus::Open);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_matches_valid_transitions() {
        assert!(!TestStatus::Open.is_terminal());
        assert!(TestStatus::Settled.is_terminal());
        assert!(TestStatus::Voided.is_terminal());
    }
}
