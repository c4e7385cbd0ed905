//! Exercise repository port.

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ExerciseId};
use async_trait::async_trait;

/// Repository port for the training exercise catalog.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Save a new exercise.
    async fn save(&self, exercise: &Exercise) -> Result<(), DomainError>;

    /// Find an exercise by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DomainError>;

    /// List all exercises.
    async fn list(&self) -> Result<Vec<Exercise>, DomainError>;

    /// Delete an exercise.
    ///
    /// # Errors
    ///
    /// - `ExerciseNotFound` if the exercise doesn't exist
    async fn delete(&self, id: &ExerciseId) -> Result<(), DomainError>;
}
