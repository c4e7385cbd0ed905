//! PostgreSQL implementation of MemberRepository.

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Timestamp};
use crate::domain::member::{Member, MemberCode, ScheduleRestriction};
use crate::ports::MemberRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the MemberRepository port.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    name: String,
    code: String,
    schedule: String,
    phone: Option<String>,
    email: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let code = MemberCode::new(row.code).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid stored code: {}", e))
        })?;
        Ok(Member {
            id: MemberId::from_uuid(row.id),
            name: row.name,
            code,
            schedule: parse_schedule(&row.schedule)?,
            phone: row.phone,
            email: row.email,
            active: row.active,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

pub(super) fn parse_schedule(s: &str) -> Result<ScheduleRestriction, DomainError> {
    match s {
        "unrestricted" => Ok(ScheduleRestriction::Unrestricted),
        "mornings_only" => Ok(ScheduleRestriction::MorningsOnly),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid schedule value: {}", s),
        )),
    }
}

pub(super) fn schedule_to_string(schedule: &ScheduleRestriction) -> &'static str {
    match schedule {
        ScheduleRestriction::Unrestricted => "unrestricted",
        ScheduleRestriction::MorningsOnly => "mornings_only",
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO members (
                id, name, code, schedule, phone, email, active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(member.code.as_str())
        .bind(schedule_to_string(&member.schedule))
        .bind(&member.phone)
        .bind(&member.email)
        .bind(member.active)
        .bind(member.created_at.as_datetime())
        .bind(member.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = $2, schedule = $3, phone = $4, email = $5, active = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(schedule_to_string(&member.schedule))
        .bind(&member.phone)
        .bind(&member.email)
        .bind(member.active)
        .bind(member.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                format!("No member with id {}", member.id),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(
            "SELECT id, name, code, schedule, phone, email, active, created_at, updated_at \
             FROM members WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.map(Member::try_from).transpose()
    }

    async fn find_by_code(&self, code: &MemberCode) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(
            "SELECT id, name, code, schedule, phone, email, active, created_at, updated_at \
             FROM members WHERE code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.map(Member::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            "SELECT id, name, code, schedule, phone, email, active, created_at, updated_at \
             FROM members ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.into_iter().map(Member::try_from).collect()
    }

    async fn delete(&self, id: &MemberId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_codec_roundtrips() {
        for schedule in [
            ScheduleRestriction::Unrestricted,
            ScheduleRestriction::MorningsOnly,
        ] {
            let parsed = parse_schedule(schedule_to_string(&schedule)).unwrap();
            assert_eq!(parsed, schedule);
        }
    }

    #[test]
    fn parse_schedule_rejects_unknown_values() {
        assert!(parse_schedule("weekends_only").is_err());
    }
}
