use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::coerce;
use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::models::exercise::date_string;
use crate::models::CreateExercise;
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

/// Response for a logged exercise. `_id` is the owning user's identifier;
/// the exercise's own id is never exposed.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub date: String,
    pub duration: Option<i64>,
    pub description: String,
}

/// POST /api/users/{id}/exercises
pub async fn create(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    JsonOrForm(form): JsonOrForm<CreateExercise>,
) -> Result<Json<ExerciseResponse>> {
    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let duration = coerce::duration(&form.duration);
    // Absent, empty, or malformed dates fall back to today.
    let date = form
        .date
        .as_deref()
        .and_then(coerce::date)
        .unwrap_or_else(|| Utc::now().date_naive());

    let exercise = state
        .exercise_repo
        .create(&user, &form.description, duration, date)
        .await?;

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: exercise.username,
        date: date_string(exercise.date),
        duration: exercise.duration,
        description: exercise.description,
    }))
}
