//! PostgreSQL implementation of ExerciseRepository.

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId, Timestamp};
use crate::ports::ExerciseRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::map_sqlx_err;

/// PostgreSQL implementation of the ExerciseRepository port.
pub struct PostgresExerciseRepository {
    pool: PgPool,
}

impl PostgresExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExerciseRow {
    id: Uuid,
    name: String,
    muscle_group: String,
    description: Option<String>,
    demo_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ExerciseRow> for Exercise {
    fn from(row: ExerciseRow) -> Self {
        Exercise {
            id: ExerciseId::from_uuid(row.id),
            name: row.name,
            muscle_group: row.muscle_group,
            description: row.description,
            demo_url: row.demo_url,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl ExerciseRepository for PostgresExerciseRepository {
    async fn save(&self, exercise: &Exercise) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO exercises (id, name, muscle_group, description, demo_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(exercise.id.as_uuid())
        .bind(&exercise.name)
        .bind(&exercise.muscle_group)
        .bind(&exercise.description)
        .bind(&exercise.demo_url)
        .bind(exercise.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DomainError> {
        let row: Option<ExerciseRow> = sqlx::query_as(
            "SELECT id, name, muscle_group, description, demo_url, created_at \
             FROM exercises WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(row.map(Exercise::from))
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        let rows: Vec<ExerciseRow> = sqlx::query_as(
            "SELECT id, name, muscle_group, description, demo_url, created_at \
             FROM exercises ORDER BY muscle_group, name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(rows.into_iter().map(Exercise::from).collect())
    }

    async fn delete(&self, id: &ExerciseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ExerciseNotFound,
                format!("No exercise with id {}", id),
            ));
        }
        Ok(())
    }
}
