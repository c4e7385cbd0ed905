//! HTTP DTOs for exercise endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::exercise::Exercise;

/// Request to add an exercise.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: String,
    pub muscle_group: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

/// Exercise details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub name: String,
    pub muscle_group: String,
    pub description: Option<String>,
    pub demo_url: Option<String>,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id.to_string(),
            name: exercise.name,
            muscle_group: exercise.muscle_group,
            description: exercise.description,
            demo_url: exercise.demo_url,
        }
    }
}

/// Response listing the exercise catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<ExerciseResponse>,
}
