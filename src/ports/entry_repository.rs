//! Entry record repository port.
//!
//! Entry records are append-only facts: this port can insert and read,
//! never update or delete. No dedup window exists; two immediate
//! check-ins by the same member are two rows.

use crate::domain::checkin::EntryRecord;
use crate::domain::foundation::{DomainError, MemberId};
use async_trait::async_trait;

/// Repository port for append-only entry records.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Append one entry record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure; the caller surfaces this
    ///   as a retryable infrastructure error, not a rule rejection
    async fn append(&self, record: &EntryRecord) -> Result<(), DomainError>;

    /// Most recent entries for a member, newest first, at most `limit`.
    async fn recent_for_member(
        &self,
        member_id: &MemberId,
        limit: u32,
    ) -> Result<Vec<EntryRecord>, DomainError>;
}
