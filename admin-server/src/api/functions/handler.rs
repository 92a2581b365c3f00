//! Function API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{Function, FunctionCreate, FunctionListItem, FunctionQuery, FunctionUpdate, StatusUpdate};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::function;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FunctionQuery>,
) -> AppResult<Json<Vec<FunctionListItem>>> {
    Ok(Json(function::list(&state.pool, &query).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Function>> {
    let function = function::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::FunctionNotFound, format!("Function {id} not found"))
    })?;
    Ok(Json(function))
}

pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<FunctionCreate>,
) -> AppResult<Json<Function>> {
    validate_required_text(&payload.function_name, "functionName", MAX_NAME_LEN)?;
    validate_required_text(&payload.code_no, "codeNo", MAX_SHORT_TEXT_LEN)?;

    let function = function::create(&state.pool, payload).await?;
    tracing::info!(
        user_id = current_user.id,
        function_id = function.id,
        module_id = function.module_id,
        "Function created"
    );
    Ok(Json(function))
}

pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<FunctionUpdate>,
) -> AppResult<Json<Function>> {
    validate_required_text(&payload.function_name, "functionName", MAX_NAME_LEN)?;
    validate_required_text(&payload.code_no, "codeNo", MAX_SHORT_TEXT_LEN)?;

    let function = function::update(&state.pool, id, payload).await?;
    tracing::info!(user_id = current_user.id, function_id = id, "Function updated");
    Ok(Json(function))
}

pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Function>> {
    Ok(Json(function::update_status(&state.pool, id, payload.status).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    function::delete(&state.pool, id).await?;
    tracing::info!(user_id = current_user.id, function_id = id, "Function deleted");
    Ok(ApiResponse::ok_with_message("Function deleted"))
}
