use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, ExercisePayload, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> Result<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM exercises WHERE id = ?",
                Exercise::COLUMNS
            ))?;
            let exercise = stmt.query_row([id], Exercise::from_row).optional()?;
            exercise.ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Returns at most `count` exercises in id order, skipping the first `start`.
    pub async fn list(&self, start: i64, count: i64) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM exercises ORDER BY id LIMIT ? OFFSET ?",
                Exercise::COLUMNS
            ))?;
            let exercises = stmt
                .query_map([count, start], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn create(&self, payload: ExercisePayload) -> Result<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (name, workoutType, sets) VALUES (?, ?, ?)",
                rusqlite::params![payload.name, payload.workout_type, payload.sets],
            )?;
            Ok(payload.into_exercise(conn.last_insert_rowid()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Overwrites every column but `id`. Returns `false` when no row has that id.
    pub async fn update(&self, exercise: &Exercise) -> Result<bool> {
        let pool = self.pool.clone();
        let exercise = exercise.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE exercises SET name = ?, workoutType = ?, sets = ? WHERE id = ?",
                rusqlite::params![
                    exercise.name,
                    exercise.workout_type,
                    exercise.sets,
                    exercise.id
                ],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM exercises WHERE id = ?", [id])?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
