//! Entry record - immutable proof of one gym visit.

use crate::domain::foundation::{EntryId, MemberId, SubscriptionId, Timestamp};
use serde::{Deserialize, Serialize};

/// One recorded visit.
///
/// Entry records are append-only facts: created exactly once per
/// successful check-in, never mutated or deleted. There are deliberately
/// no mutator methods on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Unique identifier for this record.
    pub id: EntryId,

    /// Member who entered.
    pub member_id: MemberId,

    /// Subscription the visit was counted against.
    pub subscription_id: SubscriptionId,

    /// When the member entered, UTC.
    pub recorded_at: Timestamp,
}

impl EntryRecord {
    /// Creates a new entry record with a fresh id.
    pub fn new(member_id: MemberId, subscription_id: SubscriptionId, recorded_at: Timestamp) -> Self {
        Self {
            id: EntryId::new(),
            member_id,
            subscription_id,
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_get_distinct_ids() {
        let member = MemberId::new();
        let sub = SubscriptionId::new();
        let now = Timestamp::now();

        let a = EntryRecord::new(member, sub, now);
        let b = EntryRecord::new(member, sub, now);

        assert_ne!(a.id, b.id);
        assert_eq!(a.recorded_at, b.recorded_at);
    }
}
