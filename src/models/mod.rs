pub mod exercise;
pub mod from_row;

pub use exercise::{Exercise, ExercisePayload};
pub use from_row::FromSqliteRow;
