//! Roster reader port (read side).
//!
//! The Membership Store's "fetch members with active subscriptions"
//! interface: one joined row per current subscription, carrying member
//! identity, plan details, schedule flag, period dates, and stored
//! status. The Entry Validator runs against this snapshot; effective
//! expiry is derived by the caller, never by the store.
//!
//! # Example
//!
//! ```ignore
//! let roster = reader.fetch_active().await?;
//! let admission = evaluate_entry(&code, &roster, &moment)?;
//! ```

use crate::domain::checkin::RosterEntry;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Reader port for the members-with-subscriptions roster.
#[async_trait]
pub trait RosterReader: Send + Sync {
    /// Fetch the current roster snapshot: every member joined with their
    /// current subscription, including display-only entry counts.
    async fn fetch_active(&self) -> Result<Vec<RosterEntry>, DomainError>;
}
