//! User API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{User, UserCreate, UserQuery, UserUpdate};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_password, validate_required_text,
};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(user::list(&state.pool, &query).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = user::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::UserNotFound, format!("User {id} not found"))
    })?;
    Ok(Json(user))
}

pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.account, "account", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_password(&payload.password)?;

    let user = user::create(&state.pool, payload).await?;
    tracing::info!(user_id = current_user.id, created_user_id = user.id, account = %user.account, "User created");
    Ok(Json(user))
}

pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.account, "account", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(password) = payload.password.as_deref()
        && !password.is_empty()
    {
        validate_password(password)?;
    }

    let password_changed = payload.password.as_deref().is_some_and(|p| !p.is_empty());
    let user = user::update(&state.pool, id, payload).await?;
    if password_changed {
        security_log!("INFO", "password_changed", user_id = id, changed_by = current_user.id);
    }
    tracing::info!(user_id = current_user.id, updated_user_id = id, "User updated");
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    if id == current_user.id {
        security_log!("WARN", "self_delete_blocked", user_id = id);
        return Err(AppError::forbidden("You cannot delete your own account"));
    }
    user::delete(&state.pool, id).await?;
    tracing::info!(user_id = current_user.id, deleted_user_id = id, "User deleted");
    Ok(ApiResponse::ok_with_message("User deleted"))
}
