//! Exercise catalog handlers: create, list, delete.

use std::sync::Arc;

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ExerciseId};
use crate::ports::ExerciseRepository;

/// Command to add an exercise to the catalog.
#[derive(Debug, Clone)]
pub struct CreateExerciseCommand {
    pub name: String,
    pub muscle_group: String,
    pub description: Option<String>,
    pub demo_url: Option<String>,
}

/// Handler for exercise creation.
pub struct CreateExerciseHandler {
    exercises: Arc<dyn ExerciseRepository>,
}

impl CreateExerciseHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    pub async fn handle(&self, cmd: CreateExerciseCommand) -> Result<Exercise, DomainError> {
        let mut exercise = Exercise::new(ExerciseId::new(), cmd.name, cmd.muscle_group)?;
        if let Some(description) = cmd.description {
            exercise = exercise.with_description(description);
        }
        if let Some(url) = cmd.demo_url {
            exercise = exercise.with_demo_url(url);
        }
        self.exercises.save(&exercise).await?;
        Ok(exercise)
    }
}

/// Handler listing the exercise catalog.
pub struct ListExercisesHandler {
    exercises: Arc<dyn ExerciseRepository>,
}

impl ListExercisesHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    pub async fn handle(&self) -> Result<Vec<Exercise>, DomainError> {
        self.exercises.list().await
    }
}

/// Command to delete an exercise.
#[derive(Debug, Clone)]
pub struct DeleteExerciseCommand {
    pub exercise_id: ExerciseId,
}

/// Handler for exercise deletion.
pub struct DeleteExerciseHandler {
    exercises: Arc<dyn ExerciseRepository>,
}

impl DeleteExerciseHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    pub async fn handle(&self, cmd: DeleteExerciseCommand) -> Result<(), DomainError> {
        self.exercises.delete(&cmd.exercise_id).await
    }
}
