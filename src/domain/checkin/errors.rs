//! Check-in error taxonomy.
//!
//! Two families: validation rejections are expected, user-facing outcomes
//! of the entry rules; infrastructure failures are unexpected and the same
//! attempt may simply be retried.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidCodeFormat | 400 |
//! | MemberNotFound | 404 |
//! | SubscriptionExpired | 402 |
//! | OutsideAllowedHours | 403 |
//! | LookupFailure | 500 |
//! | PersistenceFailure | 500 |

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::member::MemberCode;

/// Why a check-in attempt did not produce an entry record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckInError {
    /// The sanitized code is not exactly 6 digits. No lookup was made.
    #[error("Entry code must be exactly {} digits", MemberCode::LENGTH)]
    InvalidCodeFormat,

    /// No member holds this code.
    #[error("No member holds code {code}")]
    MemberNotFound { code: String },

    /// The member's subscription period has lapsed; renewal required.
    #[error("{member}'s subscription ended on {end_date}")]
    SubscriptionExpired { member: String, end_date: NaiveDate },

    /// A mornings-only member presented at or after local noon.
    #[error("{member} may only enter before noon")]
    OutsideAllowedHours { member: String },

    /// The roster snapshot could not be fetched.
    #[error("Could not load the member roster: {0}")]
    LookupFailure(String),

    /// The entry record write failed; the attempt may be retried.
    #[error("Could not record the visit: {0}")]
    PersistenceFailure(String),
}

impl CheckInError {
    pub fn member_not_found(code: impl Into<String>) -> Self {
        CheckInError::MemberNotFound { code: code.into() }
    }

    pub fn subscription_expired(member: impl Into<String>, end_date: NaiveDate) -> Self {
        CheckInError::SubscriptionExpired {
            member: member.into(),
            end_date,
        }
    }

    pub fn outside_allowed_hours(member: impl Into<String>) -> Self {
        CheckInError::OutsideAllowedHours {
            member: member.into(),
        }
    }

    /// True for rejections produced by the entry rules themselves.
    pub fn is_validation(&self) -> bool {
        !self.is_infrastructure()
    }

    /// True for store/transport failures where retrying the same attempt
    /// is reasonable.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            CheckInError::LookupFailure(_) | CheckInError::PersistenceFailure(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_rejections_are_validation() {
        assert!(CheckInError::InvalidCodeFormat.is_validation());
        assert!(CheckInError::member_not_found("123456").is_validation());
        assert!(CheckInError::outside_allowed_hours("Ana").is_validation());
    }

    #[test]
    fn store_failures_are_infrastructure() {
        assert!(CheckInError::PersistenceFailure("timeout".into()).is_infrastructure());
        assert!(CheckInError::LookupFailure("connection reset".into()).is_infrastructure());
        assert!(!CheckInError::InvalidCodeFormat.is_infrastructure());
    }

    #[test]
    fn expired_message_names_member_and_date() {
        let err = CheckInError::subscription_expired(
            "Ana Torres",
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        );
        assert_eq!(
            err.to_string(),
            "Ana Torres's subscription ended on 2026-01-31"
        );
    }
}
