//! GetRosterHandler - the members-with-subscriptions view.
//!
//! Serves the subscriptions page and the check-in screen: one joined row
//! per current subscription, with the effective status derived against
//! today so lapsed periods always read as expired.

use std::sync::Arc;

use crate::domain::checkin::RosterEntry;
use crate::domain::foundation::DomainError;
use crate::domain::subscription::SubscriptionStatus;
use crate::ports::{Clock, RosterReader};

/// One roster row with its derived status.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub entry: RosterEntry,
    pub effective_status: SubscriptionStatus,
}

/// Handler for the roster query.
pub struct GetRosterHandler {
    roster: Arc<dyn RosterReader>,
    clock: Arc<dyn Clock>,
}

impl GetRosterHandler {
    pub fn new(roster: Arc<dyn RosterReader>, clock: Arc<dyn Clock>) -> Self {
        Self { roster, clock }
    }

    pub async fn handle(&self) -> Result<Vec<RosterRow>, DomainError> {
        let today = self.clock.local_now().date();
        let entries = self.roster.fetch_active().await?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                let effective_status = entry.effective_status(today);
                RosterRow {
                    entry,
                    effective_status,
                }
            })
            .collect())
    }
}
