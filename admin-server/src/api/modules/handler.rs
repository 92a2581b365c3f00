//! Module API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{
    Function, Module, ModuleCreate, ModuleListItem, ModuleQuery, ModuleUpdate, ParentModuleOption,
    RouteDescriptor, StatusUpdate,
};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{function, module};
use crate::navigation::{self, TreeNode};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PATH_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};

fn validate_fields(
    module_name: &str,
    code_no: &str,
    component_name: &Option<String>,
    component_path: &Option<String>,
) -> Result<(), AppError> {
    validate_required_text(module_name, "moduleName", MAX_NAME_LEN)?;
    validate_required_text(code_no, "codeNo", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(component_name, "componentName", MAX_NAME_LEN)?;
    validate_optional_text(component_path, "componentPath", MAX_PATH_LEN)?;
    Ok(())
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ModuleQuery>,
) -> AppResult<Json<Vec<ModuleListItem>>> {
    Ok(Json(module::list(&state.pool, &query).await?))
}

pub async fn parents(State(state): State<ServerState>) -> AppResult<Json<Vec<ParentModuleOption>>> {
    Ok(Json(module::parent_options(&state.pool).await?))
}

/// Active module forest for the side menu
pub async fn navigation(State(state): State<ServerState>) -> AppResult<Json<Vec<TreeNode<Module>>>> {
    let modules = module::find_all(&state.pool).await?;
    Ok(Json(navigation::navigation_tree(modules)))
}

/// Client route table
pub async fn menu_routes(State(state): State<ServerState>) -> AppResult<Json<Vec<RouteDescriptor>>> {
    let modules = module::find_all(&state.pool).await?;
    Ok(Json(navigation::generate_routes(&modules)))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Module>> {
    let module = module::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::ModuleNotFound, format!("Module {id} not found"))
    })?;
    Ok(Json(module))
}

pub async fn functions(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Function>>> {
    Ok(Json(function::find_by_module(&state.pool, id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<ModuleCreate>,
) -> AppResult<Json<Module>> {
    validate_fields(
        &payload.module_name,
        &payload.code_no,
        &payload.component_name,
        &payload.component_path,
    )?;

    let module = module::create(&state.pool, payload).await?;
    tracing::info!(
        user_id = current_user.id,
        module_id = module.id,
        code_no = %module.code_no,
        "Module created"
    );
    Ok(Json(module))
}

pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ModuleUpdate>,
) -> AppResult<Json<Module>> {
    validate_fields(
        &payload.module_name,
        &payload.code_no,
        &payload.component_name,
        &payload.component_path,
    )?;

    let module = module::update(&state.pool, id, payload).await?;
    tracing::info!(user_id = current_user.id, module_id = id, "Module updated");
    Ok(Json(module))
}

pub async fn update_status(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Module>> {
    let module = module::update_status(&state.pool, id, payload.status).await?;
    tracing::info!(user_id = current_user.id, module_id = id, status = %payload.status, "Module status changed");
    Ok(Json(module))
}

pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    module::delete(&state.pool, id).await?;
    tracing::info!(user_id = current_user.id, module_id = id, "Module deleted");
    Ok(ApiResponse::ok_with_message("Module deleted"))
}
