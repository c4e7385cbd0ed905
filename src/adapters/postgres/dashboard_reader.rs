//! PostgreSQL implementation of DashboardReader.
//!
//! Five small aggregate queries, one per card. The caller's `today`
//! drives every comparison so the counters match the roster view.

use crate::domain::dashboard::{DashboardOverview, EXPIRY_WINDOW_DAYS};
use crate::domain::foundation::DomainError;
use crate::ports::DashboardReader;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use sqlx::PgPool;

use super::map_sqlx_err;

/// PostgreSQL implementation of the DashboardReader port.
pub struct PostgresDashboardReader {
    pool: PgPool,
}

impl PostgresDashboardReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardReader for PostgresDashboardReader {
    async fn overview(&self, today: NaiveDate) -> Result<DashboardOverview, DomainError> {
        let window_end = today
            .checked_add_days(Days::new(EXPIRY_WINDOW_DAYS as u64))
            .unwrap_or(NaiveDate::MAX);

        let (active_members,): (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT member_id) FROM subscriptions WHERE end_date >= $1",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let (expiring_this_week,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM subscriptions WHERE end_date >= $1 AND end_date <= $2",
        )
        .bind(today)
        .bind(window_end)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let day_start = today.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc();
        let (entries_today,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM entries \
             WHERE recorded_at >= $1 AND recorded_at < $1 + INTERVAL '1 day'",
        )
        .bind(day_start)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let (sales_today_cents,): (Option<i64>,) = sqlx::query_as(
            "SELECT SUM(total_cents) FROM sales \
             WHERE sold_at >= $1 AND sold_at < $1 + INTERVAL '1 day'",
        )
        .bind(day_start)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let (low_stock_products,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE stock <= low_stock_threshold")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        Ok(DashboardOverview {
            active_members: active_members.max(0) as u64,
            expiring_this_week: expiring_this_week.max(0) as u64,
            entries_today: entries_today.max(0) as u64,
            sales_today_cents: sales_today_cents.unwrap_or(0),
            low_stock_products: low_stock_products.max(0) as u64,
        })
    }
}
