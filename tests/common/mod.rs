#![allow(dead_code)]

use axum::{body::Body, Router};
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use exercise_api::db::{create_memory_pool, DbPool};
use exercise_api::handlers::exercises::ExercisesState;
use exercise_api::migrations::run_migrations_untracked;
use exercise_api::models::{Exercise, ExercisePayload};
use exercise_api::repositories::ExerciseRepository;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_untracked(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let exercises_state = ExercisesState {
        exercise_repo: ExerciseRepository::new(pool),
    };
    exercise_api::routes::create_router(exercises_state)
}

pub async fn create_test_exercise(
    pool: &DbPool,
    name: &str,
    workout_type: &str,
    sets: i32,
) -> Exercise {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    exercise_repo
        .create(ExercisePayload {
            name: name.to_string(),
            workout_type: workout_type.to_string(),
            sets: Some(sets),
        })
        .await
        .unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}
