//! Training exercise catalog entry.

use crate::domain::foundation::{ExerciseId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// A training exercise trainers assign to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier for this exercise.
    pub id: ExerciseId,

    /// Display name, e.g. "Barbell squat".
    pub name: String,

    /// Muscle group the exercise targets, e.g. "legs".
    pub muscle_group: String,

    /// Free-form coaching notes.
    pub description: Option<String>,

    /// Link to a demonstration video, if one exists.
    pub demo_url: Option<String>,

    /// When the exercise was created.
    pub created_at: Timestamp,
}

impl Exercise {
    /// Creates a new exercise.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if name or muscle group is blank.
    pub fn new(
        id: ExerciseId,
        name: impl Into<String>,
        muscle_group: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let muscle_group = muscle_group.into();
        if muscle_group.trim().is_empty() {
            return Err(ValidationError::empty_field("muscle_group"));
        }
        Ok(Self {
            id,
            name,
            muscle_group,
            description: None,
            demo_url: None,
            created_at: Timestamp::now(),
        })
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a demo video link.
    pub fn with_demo_url(mut self, url: impl Into<String>) -> Self {
        self.demo_url = Some(url.into());
        self
    }
}
