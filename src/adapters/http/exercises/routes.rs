//! Axum router for exercise endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{create_exercise, delete_exercise, list_exercises, ExercisesAppState};

/// Create the exercises API router.
///
/// # Routes
/// - `GET /` - list the catalog
/// - `POST /` - add an exercise
/// - `DELETE /:id` - remove an exercise
pub fn exercises_routes() -> Router<ExercisesAppState> {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route("/:id", delete(delete_exercise))
}
