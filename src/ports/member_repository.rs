//! Member repository port.
//!
//! Defines the contract for persisting and retrieving Member aggregates.
//!
//! # Design
//!
//! - **Unique code**: implementations enforce uniqueness of the 6-digit
//!   code; `save` fails when a code collides
//! - **Soft removal**: members are deactivated, not deleted; `delete`
//!   exists primarily for tests

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::{Member, MemberCode};
use async_trait::async_trait;

/// Repository port for Member aggregate persistence.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a new member.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the code is already taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, member: &Member) -> Result<(), DomainError>;

    /// Update an existing member.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, member: &Member) -> Result<(), DomainError>;

    /// Find a member by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError>;

    /// Find a member by their 6-digit code. Returns `None` if no member
    /// holds the code.
    async fn find_by_code(&self, code: &MemberCode) -> Result<Option<Member>, DomainError>;

    /// List all members, active and inactive.
    async fn list(&self) -> Result<Vec<Member>, DomainError>;

    /// Delete a member (primarily for testing).
    async fn delete(&self, id: &MemberId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MemberRepository) {}
    }
}
