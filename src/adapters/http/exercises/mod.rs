//! Exercise HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateExerciseRequest, ExerciseListResponse, ExerciseResponse};
pub use handlers::ExercisesAppState;
pub use routes::exercises_routes;
