//! PostgreSQL implementation of EntryRepository.
//!
//! Inserts only; entry rows are never updated or deleted.

use crate::domain::checkin::EntryRecord;
use crate::domain::foundation::{DomainError, EntryId, MemberId, SubscriptionId, Timestamp};
use crate::ports::EntryRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the EntryRepository port.
pub struct PostgresEntryRepository {
    pool: PgPool,
}

impl PostgresEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EntryRow {
    id: Uuid,
    member_id: Uuid,
    subscription_id: Uuid,
    recorded_at: DateTime<Utc>,
}

impl From<EntryRow> for EntryRecord {
    fn from(row: EntryRow) -> Self {
        EntryRecord {
            id: EntryId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            subscription_id: SubscriptionId::from_uuid(row.subscription_id),
            recorded_at: Timestamp::from_datetime(row.recorded_at),
        }
    }
}

#[async_trait]
impl EntryRepository for PostgresEntryRepository {
    async fn append(&self, record: &EntryRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO entries (id, member_id, subscription_id, recorded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.member_id.as_uuid())
        .bind(record.subscription_id.as_uuid())
        .bind(record.recorded_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn recent_for_member(
        &self,
        member_id: &MemberId,
        limit: u32,
    ) -> Result<Vec<EntryRecord>, DomainError> {
        let rows: Vec<EntryRow> = sqlx::query_as(
            "SELECT id, member_id, subscription_id, recorded_at \
             FROM entries WHERE member_id = $1 \
             ORDER BY recorded_at DESC LIMIT $2",
        )
        .bind(member_id.as_uuid())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rows.into_iter().map(EntryRecord::from).collect())
    }
}
