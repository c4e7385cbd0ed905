//! PostgreSQL implementation of PlanRepository.

use crate::domain::foundation::{DomainError, PlanId, Timestamp};
use crate::domain::subscription::Plan;
use crate::ports::PlanRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the PlanRepository port.
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    name: String,
    price_cents: i64,
    entry_allowance: Option<i32>,
    duration_days: i32,
    created_at: DateTime<Utc>,
}

impl From<PlanRow> for Plan {
    fn from(row: PlanRow) -> Self {
        Plan {
            id: PlanId::from_uuid(row.id),
            name: row.name,
            price_cents: row.price_cents,
            entry_allowance: row.entry_allowance.map(|n| n as u32),
            duration_days: row.duration_days as u32,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn save(&self, plan: &Plan) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO plans (id, name, price_cents, entry_allowance, duration_days, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(plan.id.as_uuid())
        .bind(&plan.name)
        .bind(plan.price_cents)
        .bind(plan.entry_allowance.map(|n| n as i32))
        .bind(plan.duration_days as i32)
        .bind(plan.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(
            "SELECT id, name, price_cents, entry_allowance, duration_days, created_at \
             FROM plans WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(row.map(Plan::from))
    }

    async fn list(&self) -> Result<Vec<Plan>, DomainError> {
        let rows: Vec<PlanRow> = sqlx::query_as(
            "SELECT id, name, price_cents, entry_allowance, duration_days, created_at \
             FROM plans ORDER BY price_cents",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rows.into_iter().map(Plan::from).collect())
    }
}
