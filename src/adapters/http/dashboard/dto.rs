//! HTTP DTOs for the dashboard endpoint.

use serde::Serialize;

use crate::domain::dashboard::DashboardOverview;

/// The dashboard card counters.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewResponse {
    pub active_members: u64,
    pub expiring_this_week: u64,
    pub entries_today: u64,
    pub sales_today_cents: i64,
    pub low_stock_products: u64,
}

impl From<DashboardOverview> for OverviewResponse {
    fn from(overview: DashboardOverview) -> Self {
        Self {
            active_members: overview.active_members,
            expiring_this_week: overview.expiring_this_week,
            entries_today: overview.entries_today,
            sales_today_cents: overview.sales_today_cents,
            low_stock_products: overview.low_stock_products,
        }
    }
}
