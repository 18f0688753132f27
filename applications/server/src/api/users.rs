/// Users API routes
use super::extract::{JsonBody, ListUsersQuery, UserIdPath};
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use starter_core::{CreateUser, UpdateUser, User};

/// GET /api/users?limit=&offset=
/// List users; invalid bounds fall back to limit 100, offset 0
pub async fn list_users(
    State(app_state): State<AppState>,
    query: Option<Query<ListUsersQuery>>,
) -> Result<Json<Vec<User>>> {
    let page = query.map(|Query(q)| q.pagination()).unwrap_or_default();
    let users = app_state.users.list_users(page).await?;
    Ok(Json(users))
}

/// POST /api/users
/// Create a user
pub async fn create_user(
    State(app_state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state.users.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id
/// Get one user
pub async fn get_user(
    UserIdPath(id): UserIdPath,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.users.get_user(id).await?;
    Ok(Json(user))
}

/// PUT /api/users/:id
/// Replace username and email
pub async fn update_user(
    UserIdPath(id): UserIdPath,
    State(app_state): State<AppState>,
    JsonBody(input): JsonBody<UpdateUser>,
) -> Result<Json<User>> {
    let user = app_state.users.update_user(id, input).await?;
    Ok(Json(user))
}

/// DELETE /api/users/:id
/// Delete a user
pub async fn delete_user(
    UserIdPath(id): UserIdPath,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    app_state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
