//! Subscription repository port (write side).
//!
//! Defines the contract for persisting and retrieving Subscription
//! aggregates. Read-side joins for the check-in path go through
//! [`RosterReader`] instead.
//!
//! [`RosterReader`]: super::RosterReader

use crate::domain::foundation::{DomainError, MemberId, SubscriptionId};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Repository port for Subscription aggregate persistence.
///
/// Implementations must ensure a member has at most one current
/// subscription row at a time; history is kept as superseded rows.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Save a new subscription.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Update an existing subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &SubscriptionId)
        -> Result<Option<Subscription>, DomainError>;

    /// Find the member's current subscription (the one with the latest
    /// end date). Returns `None` if the member has never subscribed.
    async fn find_current_by_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// List all subscriptions for a member, newest first.
    async fn list_for_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Vec<Subscription>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SubscriptionRepository) {}
    }
}
