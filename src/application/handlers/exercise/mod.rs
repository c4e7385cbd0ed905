//! Exercise catalog handlers.

mod manage_exercises;

pub use manage_exercises::{
    CreateExerciseCommand, CreateExerciseHandler, DeleteExerciseCommand, DeleteExerciseHandler,
    ListExercisesHandler,
};
