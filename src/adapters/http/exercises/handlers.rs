//! HTTP handlers for exercise endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::application::handlers::exercise::{
    CreateExerciseCommand, CreateExerciseHandler, DeleteExerciseCommand, DeleteExerciseHandler,
    ListExercisesHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ExerciseRepository;

use super::dto::{CreateExerciseRequest, ExerciseListResponse, ExerciseResponse};

/// Shared state for exercise endpoints.
#[derive(Clone)]
pub struct ExercisesAppState {
    pub exercise_repository: Arc<dyn ExerciseRepository>,
}

impl ExercisesAppState {
    pub fn create_handler(&self) -> CreateExerciseHandler {
        CreateExerciseHandler::new(self.exercise_repository.clone())
    }

    pub fn list_handler(&self) -> ListExercisesHandler {
        ListExercisesHandler::new(self.exercise_repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteExerciseHandler {
        DeleteExerciseHandler::new(self.exercise_repository.clone())
    }
}

/// POST /api/exercises - add an exercise
pub async fn create_exercise(
    State(state): State<ExercisesAppState>,
    Json(request): Json<CreateExerciseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let exercise = state
        .create_handler()
        .handle(CreateExerciseCommand {
            name: request.name,
            muscle_group: request.muscle_group,
            description: request.description,
            demo_url: request.demo_url,
        })
        .await?;

    Ok(Json(ExerciseResponse::from(exercise)))
}

/// GET /api/exercises - list the catalog
pub async fn list_exercises(
    State(state): State<ExercisesAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let exercises = state.list_handler().handle().await?;
    Ok(Json(ExerciseListResponse {
        exercises: exercises.into_iter().map(ExerciseResponse::from).collect(),
    }))
}

/// DELETE /api/exercises/:id - remove an exercise
pub async fn delete_exercise(
    State(state): State<ExercisesAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let exercise_id = id.parse().map_err(|_| {
        ApiError::from(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("'{}' is not a valid exercise id", id),
        ))
    })?;

    state
        .delete_handler()
        .handle(DeleteExerciseCommand { exercise_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
