use axum::{extract::State, Json};

use crate::error::Result;
use crate::extract::JsonOrForm;
use crate::models::{CreateUser, User};
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
}

/// GET /api/users
pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<User>>> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create(
    State(state): State<UsersState>,
    JsonOrForm(form): JsonOrForm<CreateUser>,
) -> Result<Json<User>> {
    let user = state.user_repo.create(&form.username).await?;
    Ok(Json(user))
}
