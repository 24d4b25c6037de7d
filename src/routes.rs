use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{exercises, fallback, health};

pub fn create_router(exercises_state: exercises::ExercisesState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Exercise routes
        .route("/exercises", get(exercises::list))
        .route("/exercise", post(exercises::create))
        .route(
            "/exercise/{id}",
            get(exercises::show)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        // Applies to the routes registered above, so it must stay after them.
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .fallback(fallback::not_found)
        .with_state(exercises_state)
        .layer(TraceLayer::new_for_http())
}
