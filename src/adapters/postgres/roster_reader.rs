//! PostgreSQL implementation of RosterReader.
//!
//! One query joins each active member with their current subscription and
//! its plan, and folds in the display-only entry counts. The effective
//! expiry is NOT computed here: the store returns stored status and dates,
//! and callers derive expiry against their own "today".

use crate::domain::checkin::RosterEntry;
use crate::domain::foundation::{DomainError, ErrorCode, MemberId, SubscriptionId, Timestamp};
use crate::domain::member::MemberCode;
use crate::ports::RosterReader;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::member_repository::parse_schedule;
use super::subscription_repository::parse_status;
use super::map_sqlx_err;

/// PostgreSQL implementation of the RosterReader port.
pub struct PostgresRosterReader {
    pool: PgPool,
}

impl PostgresRosterReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RosterRow {
    member_id: Uuid,
    member_name: String,
    code: String,
    schedule: String,
    subscription_id: Uuid,
    plan_name: String,
    plan_price_cents: i64,
    entry_allowance: Option<i32>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
    entries_used: i64,
    last_entry_at: Option<DateTime<Utc>>,
}

impl TryFrom<RosterRow> for RosterEntry {
    type Error = DomainError;

    fn try_from(row: RosterRow) -> Result<Self, Self::Error> {
        let code = MemberCode::new(row.code).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid stored code: {}", e))
        })?;
        Ok(RosterEntry {
            member_id: MemberId::from_uuid(row.member_id),
            member_name: row.member_name,
            code,
            schedule: parse_schedule(&row.schedule)?,
            subscription_id: SubscriptionId::from_uuid(row.subscription_id),
            plan_name: row.plan_name,
            plan_price_cents: row.plan_price_cents,
            entry_allowance: row.entry_allowance.map(|n| n as u32),
            start_date: row.start_date,
            end_date: row.end_date,
            status: parse_status(&row.status)?,
            entries_used: row.entries_used.max(0) as u32,
            last_entry_at: row.last_entry_at.map(Timestamp::from_datetime),
        })
    }
}

#[async_trait]
impl RosterReader for PostgresRosterReader {
    async fn fetch_active(&self) -> Result<Vec<RosterEntry>, DomainError> {
        let rows: Vec<RosterRow> = sqlx::query_as(
            r#"
            SELECT DISTINCT ON (m.id)
                m.id AS member_id,
                m.name AS member_name,
                m.code,
                m.schedule,
                s.id AS subscription_id,
                p.name AS plan_name,
                p.price_cents AS plan_price_cents,
                p.entry_allowance,
                s.start_date,
                s.end_date,
                s.status,
                (SELECT COUNT(*) FROM entries e
                 WHERE e.subscription_id = s.id) AS entries_used,
                (SELECT MAX(e.recorded_at) FROM entries e
                 WHERE e.member_id = m.id) AS last_entry_at
            FROM members m
            JOIN subscriptions s ON s.member_id = m.id
            JOIN plans p ON p.id = s.plan_id
            WHERE m.active
            ORDER BY m.id, s.end_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.into_iter().map(RosterEntry::try_from).collect()
    }
}
