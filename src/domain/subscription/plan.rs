//! Subscription plan - the priced template a subscription is cut from.

use crate::domain::foundation::{PlanId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// A subscription plan.
///
/// Prices are integer cents. `entry_allowance` of `None` means unlimited
/// visits for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan.
    pub id: PlanId,

    /// Display name, e.g. "Monthly unlimited".
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Visits included per period; `None` means unlimited.
    pub entry_allowance: Option<u32>,

    /// Length of one subscription period in days.
    pub duration_days: u32,

    /// When the plan was created.
    pub created_at: Timestamp,
}

impl Plan {
    /// Creates a new plan.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the price is negative or the duration is zero
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        price_cents: i64,
        entry_allowance: Option<u32>,
        duration_days: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if price_cents < 0 {
            return Err(ValidationError::out_of_range(
                "price_cents",
                0,
                i64::MAX,
                price_cents,
            ));
        }
        if duration_days == 0 {
            return Err(ValidationError::out_of_range("duration_days", 1, 3650, 0));
        }
        Ok(Self {
            id,
            name,
            price_cents,
            entry_allowance,
            duration_days,
            created_at: Timestamp::now(),
        })
    }
}
