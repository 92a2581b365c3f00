//! Role API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    Role, RoleCreate, RoleFunctionItem, RoleFunctionsUpdate, RoleModuleNode, RoleModulesUpdate,
    RoleUpdate, RoleUserItem, RoleUsersUpdate,
};
use shared::{ApiResponse, AppResult};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::role;
use crate::navigation::TreeNode;
use crate::services::{permission, role_assignment};
use crate::utils::validation::{MAX_NAME_LEN, validate_ids, validate_required_text};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Role>>> {
    Ok(Json(role::find_all(&state.pool).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Role>> {
    Ok(Json(role::ensure_exists(&state.pool, id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<RoleCreate>,
) -> AppResult<Json<Role>> {
    validate_required_text(&payload.role_name, "roleName", MAX_NAME_LEN)?;

    let role = role::create(&state.pool, payload).await?;
    tracing::info!(user_id = current_user.id, role_id = role.id, role_name = %role.role_name, "Role created");
    Ok(Json(role))
}

pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<Role>> {
    validate_required_text(&payload.role_name, "roleName", MAX_NAME_LEN)?;

    let role = role::update(&state.pool, id, payload).await?;
    tracing::info!(user_id = current_user.id, role_id = id, "Role updated");
    Ok(Json(role))
}

pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    role::delete(&state.pool, id).await?;
    tracing::info!(user_id = current_user.id, role_id = id, "Role deleted");
    Ok(ApiResponse::ok_with_message("Role deleted"))
}

/// Permission editor tree
pub async fn modules(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<TreeNode<RoleModuleNode>>>> {
    Ok(Json(permission::role_module_tree(&state.pool, id).await?))
}

pub async fn set_modules(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RoleModulesUpdate>,
) -> AppResult<ApiResponse<usize>> {
    validate_ids(&payload.module_ids, "moduleIds")?;
    let count = role_assignment::set_role_modules(&state.pool, id, &payload.module_ids).await?;
    tracing::info!(user_id = current_user.id, role_id = id, count, "Role modules replaced");
    Ok(ApiResponse::success_with_message("Role modules updated", count))
}

pub async fn users(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<RoleUserItem>>> {
    Ok(Json(permission::role_users(&state.pool, id).await?))
}

pub async fn set_users(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUsersUpdate>,
) -> AppResult<ApiResponse<usize>> {
    validate_ids(&payload.user_ids, "userIds")?;
    let count = role_assignment::set_role_users(&state.pool, id, &payload.user_ids).await?;
    tracing::info!(user_id = current_user.id, role_id = id, count, "Role users replaced");
    Ok(ApiResponse::success_with_message("Role users updated", count))
}

pub async fn functions(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<RoleFunctionItem>>> {
    Ok(Json(permission::role_functions(&state.pool, id).await?))
}

pub async fn set_functions(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<RoleFunctionsUpdate>,
) -> AppResult<ApiResponse<usize>> {
    validate_ids(&payload.function_ids, "functionIds")?;
    let count =
        role_assignment::set_role_functions(&state.pool, id, &payload.function_ids).await?;
    tracing::info!(user_id = current_user.id, role_id = id, count, "Role functions replaced");
    Ok(ApiResponse::success_with_message("Role functions updated", count))
}
