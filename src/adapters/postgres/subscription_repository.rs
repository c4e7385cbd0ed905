//! PostgreSQL implementation of SubscriptionRepository.

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, PlanId, SubscriptionId, Timestamp};
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::ports::SubscriptionRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    member_id: Uuid,
    plan_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: SubscriptionId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            plan_id: PlanId::from_uuid(row.plan_id),
            start_date: row.start_date,
            end_date: row.end_date,
            status: parse_status(&row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

pub(super) fn parse_status(s: &str) -> Result<SubscriptionStatus, DomainError> {
    match s {
        "pending" => Ok(SubscriptionStatus::Pending),
        "active" => Ok(SubscriptionStatus::Active),
        "expired" => Ok(SubscriptionStatus::Expired),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

pub(super) fn status_to_string(status: &SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Pending => "pending",
        SubscriptionStatus::Active => "active",
        SubscriptionStatus::Expired => "expired",
    }
}

const SELECT_COLUMNS: &str =
    "id, member_id, plan_id, start_date, end_date, status, created_at, updated_at";

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, member_id, plan_id, start_date, end_date, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.member_id.as_uuid())
        .bind(subscription.plan_id.as_uuid())
        .bind(subscription.start_date)
        .bind(subscription.end_date)
        .bind(status_to_string(&subscription.status))
        .bind(subscription.created_at.as_datetime())
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions
            SET plan_id = $2, start_date = $3, end_date = $4, status = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.plan_id.as_uuid())
        .bind(subscription.start_date)
        .bind(subscription.end_date)
        .bind(status_to_string(&subscription.status))
        .bind(subscription.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                format!("No subscription with id {}", subscription.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.map(Subscription::try_from).transpose()
    }

    async fn find_current_by_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE member_id = $1 \
             ORDER BY end_date DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(member_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.map(Subscription::try_from).transpose()
    }

    async fn list_for_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM subscriptions WHERE member_id = $1 ORDER BY start_date DESC",
            SELECT_COLUMNS
        ))
        .bind(member_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.into_iter().map(Subscription::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codec_roundtrips() {
        for status in [
            SubscriptionStatus::Pending,
            SubscriptionStatus::Active,
            SubscriptionStatus::Expired,
        ] {
            assert_eq!(parse_status(status_to_string(&status)).unwrap(), status);
        }
    }

    #[test]
    fn parse_status_rejects_unknown_values() {
        assert!(parse_status("cancelled").is_err());
    }
}
