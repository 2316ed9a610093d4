use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;

use exlog::db::{create_memory_pool, DbPool};
use exlog::handlers::{exercises, logs, users};
use exlog::migrations::run_migrations_for_tests;
use exlog::models::{Exercise, User};
use exlog::repositories::{ExerciseRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool.clone());

    let users_state = users::UsersState {
        user_repo: user_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState {
        user_repo: user_repo.clone(),
        exercise_repo: exercise_repo.clone(),
    };
    let logs_state = logs::LogsState {
        user_repo,
        exercise_repo,
    };

    exlog::routes::create_router(users_state, exercises_state, logs_state)
}

pub async fn create_test_user(pool: &DbPool, username: &str) -> User {
    let user_repo = UserRepository::new(pool.clone());
    user_repo.create(username).await.unwrap()
}

pub async fn create_test_exercise(
    pool: &DbPool,
    user: &User,
    description: &str,
    duration: Option<i64>,
    date: &str,
) -> Exercise {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    exercise_repo
        .create(user, description, duration, date.parse().unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
