//! Membership code value object.
//!
//! Every member is identified at the front desk by a 6-digit numeric code.
//! Raw input arrives from a keypad or card reader and may contain stray
//! characters; it is sanitized first and only then checked for length.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::ValidationError;

/// A validated 6-digit membership code.
///
/// # Invariants
///
/// - Exactly [`MemberCode::LENGTH`] ASCII digits
/// - Matched exactly (case does not arise; codes are numeric)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberCode(String);

impl MemberCode {
    /// Number of digits in a membership code.
    pub const LENGTH: usize = 6;

    /// Creates a code from a string that must already be exactly 6 digits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the value is not exactly 6 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != Self::LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "code",
                format!("must be exactly {} digits", Self::LENGTH),
            ));
        }
        Ok(Self(value))
    }

    /// Strips non-digit characters and truncates to at most 6 characters.
    ///
    /// This mirrors what the front-desk input field does before the entry
    /// decision runs; the result still needs a length check (`"12a456"`
    /// sanitizes to `"12456"`, which is too short).
    pub fn sanitize(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_digit())
            .take(Self::LENGTH)
            .collect()
    }

    /// Sanitizes raw input and validates the result.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(Self::sanitize(raw))
    }

    /// Generates a random 6-digit code.
    ///
    /// Uniqueness is enforced by the store; callers retry on collision.
    pub fn generate() -> Self {
        let n = Uuid::new_v4().as_u128() % 1_000_000;
        Self(format!("{:06}", n))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
