use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{exercises, health, home, logs, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    logs_state: logs::LogsState,
) -> Router {
    Router::new()
        // Landing page and health
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        // User routes
        .route("/api/users", get(users::list).post(users::create))
        .with_state(users_state)
        // Exercise routes
        .route("/api/users/{id}/exercises", post(exercises::create))
        .with_state(exercises_state)
        // Log routes
        .route("/api/users/{id}/logs", get(logs::logs))
        .with_state(logs_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
