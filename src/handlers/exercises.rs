use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::extract::{ExerciseId, JsonPayload};
use crate::models::{Exercise, ExercisePayload};
use crate::repositories::ExerciseRepository;

pub const MIN_PAGE_SIZE: i64 = 10;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

// Query params are kept as raw strings: anything that is not an integer counts as 0.
#[derive(Debug, Default)]
pub struct ListQuery {
    count: Option<String>,
    start: Option<String>,
}

impl ListQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "count" => &mut query.count,
                "start" => &mut query.start,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub start: i64,
    pub count: i64,
}

impl Pagination {
    pub fn from_query(query: &ListQuery) -> Self {
        let parse = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(0)
        };

        let mut count = parse(&query.count);
        let mut start = parse(&query.start);

        // Page sizes below the minimum (zero and negatives included) are raised to it.
        if count < MIN_PAGE_SIZE {
            count = MIN_PAGE_SIZE;
        }
        if start < 0 {
            start = 0;
        }

        Self { start, count }
    }
}

#[derive(Serialize)]
pub struct DeleteResponse {
    result: &'static str,
}

pub async fn list(
    State(state): State<ExercisesState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Exercise>>> {
    let page = Pagination::from_query(&ListQuery::from_pairs(pairs));
    let exercises = state.exercise_repo.list(page.start, page.count).await?;
    Ok(Json(exercises))
}

pub async fn show(
    State(state): State<ExercisesState>,
    ExerciseId(id): ExerciseId,
) -> Result<Json<Exercise>> {
    let exercise = state.exercise_repo.get(id).await?;
    Ok(Json(exercise))
}

pub async fn create(
    State(state): State<ExercisesState>,
    JsonPayload(payload): JsonPayload<ExercisePayload>,
) -> Result<(StatusCode, Json<Exercise>)> {
    payload
        .validate()
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let exercise = state.exercise_repo.create(payload).await?;
    tracing::debug!("Created exercise {}", exercise.id);

    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn update(
    State(state): State<ExercisesState>,
    ExerciseId(id): ExerciseId,
    JsonPayload(payload): JsonPayload<ExercisePayload>,
) -> Result<Json<Exercise>> {
    payload
        .validate()
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let exercise = payload.into_exercise(id);
    if !state.exercise_repo.update(&exercise).await? {
        return Err(AppError::NotFound("Exercise not found".to_string()));
    }

    Ok(Json(exercise))
}

pub async fn delete(
    State(state): State<ExercisesState>,
    ExerciseId(id): ExerciseId,
) -> Result<Json<DeleteResponse>> {
    if !state.exercise_repo.delete(id).await? {
        return Err(AppError::NotFound("Exercise not found".to_string()));
    }

    Ok(Json(DeleteResponse { result: "success" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(count: Option<&str>, start: Option<&str>) -> ListQuery {
        ListQuery {
            count: count.map(str::to_string),
            start: start.map(str::to_string),
        }
    }

    #[test]
    fn test_pagination_defaults() {
        let page = Pagination::from_query(&ListQuery::default());
        assert_eq!(page, Pagination { start: 0, count: 10 });
    }

    #[test]
    fn test_pagination_small_counts_raised_to_minimum() {
        for raw in ["0", "1", "5", "9", "-3"] {
            let page = Pagination::from_query(&query(Some(raw), None));
            assert_eq!(page.count, 10, "count={}", raw);
        }
    }

    #[test]
    fn test_pagination_keeps_large_count() {
        let page = Pagination::from_query(&query(Some("25"), Some("40")));
        assert_eq!(page, Pagination { start: 40, count: 25 });
    }

    #[test]
    fn test_pagination_negative_start_clamped() {
        let page = Pagination::from_query(&query(Some("10"), Some("-5")));
        assert_eq!(page.start, 0);
    }

    #[test]
    fn test_list_query_first_value_wins() {
        let pairs = vec![
            ("count".to_string(), "20".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("count".to_string(), "30".to_string()),
            ("start".to_string(), "2".to_string()),
        ];

        let page = Pagination::from_query(&ListQuery::from_pairs(pairs));
        assert_eq!(page, Pagination { start: 2, count: 20 });
    }

    #[test]
    fn test_pagination_non_numeric_treated_as_zero() {
        let page = Pagination::from_query(&query(Some("lots"), Some("first")));
        assert_eq!(page, Pagination { start: 0, count: 10 });
    }
}
