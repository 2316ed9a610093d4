use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::LogEntry;
use crate::query::{LogParams, LogQuery};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct LogsState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

/// The shaped log: owner identity, post-cap count, and projected entries.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// GET /api/users/{id}/logs
pub async fn logs(
    State(state): State<LogsState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<LogResponse>> {
    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let query = LogQuery::new(&user.id, &params);
    let log = state.exercise_repo.find_logs(&query).await?;

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}
