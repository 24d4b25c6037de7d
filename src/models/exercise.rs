use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    #[serde(rename = "workoutType")]
    pub workout_type: String,
    pub sets: Option<i32>,
}

impl FromSqliteRow for Exercise {
    const COLUMNS: &'static str = "id, name, workoutType, sets";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            workout_type: row.get("workoutType")?,
            sets: row.get("sets")?,
        })
    }
}

/// Request body for creating or replacing an exercise. Any `id` the client
/// sends is ignored; ids come from the path or the database.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExercisePayload {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "workoutType")]
    pub workout_type: String,
    #[serde(default)]
    pub sets: Option<i32>,
}

impl ExercisePayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Exercise name is required");
        }
        if self.workout_type.trim().is_empty() {
            return Err("Workout type is required");
        }
        Ok(())
    }

    pub fn into_exercise(self, id: i64) -> Exercise {
        Exercise {
            id,
            name: self.name,
            workout_type: self.workout_type,
            sets: self.sets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_serializes_camel_case_workout_type() {
        let exercise = Exercise {
            id: 1,
            name: "Squat".to_string(),
            workout_type: "strength".to_string(),
            sets: Some(4),
        };

        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Squat", "workoutType": "strength", "sets": 4})
        );
    }

    #[test]
    fn test_payload_ignores_client_id() {
        let payload: ExercisePayload = serde_json::from_str(
            r#"{"id": 99, "name": "Squat", "workoutType": "strength", "sets": 4}"#,
        )
        .unwrap();

        let exercise = payload.into_exercise(7);
        assert_eq!(exercise.id, 7);
        assert_eq!(exercise.sets, Some(4));
    }

    #[test]
    fn test_payload_sets_may_be_null() {
        let payload: ExercisePayload =
            serde_json::from_str(r#"{"name": "Plank", "workoutType": "core", "sets": null}"#)
                .unwrap();
        assert_eq!(payload.sets, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_name = ExercisePayload {
            name: "   ".to_string(),
            workout_type: "strength".to_string(),
            sets: Some(3),
        };
        assert_eq!(blank_name.validate(), Err("Exercise name is required"));

        let blank_type = ExercisePayload {
            name: "Squat".to_string(),
            workout_type: String::new(),
            sets: Some(3),
        };
        assert_eq!(blank_type.validate(), Err("Workout type is required"));
    }
}
