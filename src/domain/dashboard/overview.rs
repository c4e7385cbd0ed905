//! Dashboard overview - the numbers on the landing page cards.

use serde::{Deserialize, Serialize};

/// Derived counters for the dashboard cards.
///
/// Never stored; recomputed from the store on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Members with a subscription that has not lapsed.
    pub active_members: u64,

    /// Subscriptions whose end date falls within the next 7 days.
    pub expiring_this_week: u64,

    /// Entry records stamped today.
    pub entries_today: u64,

    /// Revenue from today's sales, in cents.
    pub sales_today_cents: i64,

    /// Products at or below their low-stock threshold.
    pub low_stock_products: u64,
}

/// Days ahead that count as "expiring soon" on the dashboard.
pub const EXPIRY_WINDOW_DAYS: u32 = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overview_is_all_zeroes() {
        let overview = DashboardOverview::default();
        assert_eq!(overview.active_members, 0);
        assert_eq!(overview.sales_today_cents, 0);
    }

    #[test]
    fn serializes_all_card_fields() {
        let overview = DashboardOverview {
            active_members: 42,
            expiring_this_week: 3,
            entries_today: 17,
            sales_today_cents: 12500,
            low_stock_products: 2,
        };
        let json = serde_json::to_value(&overview).unwrap();
        assert_eq!(json["active_members"], 42);
        assert_eq!(json["sales_today_cents"], 12500);
    }
}
