//! Function Repository

use super::{RepoError, RepoResult, like_pattern};
use shared::error::ErrorCode;
use shared::models::{Function, FunctionCreate, FunctionListItem, FunctionQuery, FunctionUpdate, Status};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, function_name, code_no, module_id, sort_order, status, created_at, updated_at";

fn not_found(id: i64) -> RepoError {
    RepoError::Business(ErrorCode::FunctionNotFound, format!("Function {id} not found"))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Function>> {
    let function = sqlx::query_as::<_, Function>(&format!(
        "SELECT {COLUMNS} FROM function_item WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(function)
}

pub async fn find_by_code(pool: &SqlitePool, code_no: &str) -> RepoResult<Option<Function>> {
    let function = sqlx::query_as::<_, Function>(&format!(
        "SELECT {COLUMNS} FROM function_item WHERE code_no = ? LIMIT 1"
    ))
    .bind(code_no)
    .fetch_optional(pool)
    .await?;
    Ok(function)
}

/// Functions of one module, in display order
pub async fn find_by_module(pool: &SqlitePool, module_id: i64) -> RepoResult<Vec<Function>> {
    let functions = sqlx::query_as::<_, Function>(&format!(
        "SELECT {COLUMNS} FROM function_item WHERE module_id = ? ORDER BY sort_order, id"
    ))
    .bind(module_id)
    .fetch_all(pool)
    .await?;
    Ok(functions)
}

/// Admin list, ordered by module then function sort order
pub async fn list(pool: &SqlitePool, query: &FunctionQuery) -> RepoResult<Vec<FunctionListItem>> {
    let rows = sqlx::query_as::<_, FunctionListItem>(
        "SELECT f.id, f.function_name, f.code_no, f.module_id, f.sort_order, f.status, \
                f.created_at, f.updated_at, m.module_name \
         FROM function_item f LEFT JOIN module m ON m.id = f.module_id \
         WHERE (?1 IS NULL OR f.function_name LIKE ?1) AND (?2 IS NULL OR f.code_no LIKE ?2) \
         ORDER BY m.sort_order, f.sort_order, f.id",
    )
    .bind(like_pattern(query.function_name.as_deref()))
    .bind(like_pattern(query.code_no.as_deref()))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Number of role grants referencing a function
pub async fn count_grants(pool: &SqlitePool, id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role_function WHERE function_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

async fn ensure_code_free(pool: &SqlitePool, code_no: &str, exclude_id: Option<i64>) -> RepoResult<()> {
    if let Some(existing) = find_by_code(pool, code_no).await?
        && Some(existing.id) != exclude_id
    {
        return Err(RepoError::Business(
            ErrorCode::FunctionCodeExists,
            format!("Function code '{code_no}' already exists"),
        ));
    }
    Ok(())
}

async fn ensure_module_exists(pool: &SqlitePool, module_id: i64) -> RepoResult<()> {
    if super::module::find_by_id(pool, module_id).await?.is_none() {
        return Err(RepoError::Business(
            ErrorCode::ModuleNotFound,
            format!("Module {module_id} not found"),
        ));
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: FunctionCreate) -> RepoResult<Function> {
    let function_name = data.function_name.trim().to_string();
    let code_no = data.code_no.trim().to_string();

    ensure_code_free(pool, &code_no, None).await?;
    ensure_module_exists(pool, data.module_id).await?;

    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO function_item (function_name, code_no, module_id, sort_order, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&function_name)
    .bind(&code_no)
    .bind(data.module_id)
    .bind(data.sort_order)
    .bind(data.status.unwrap_or_default().as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create function".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: FunctionUpdate) -> RepoResult<Function> {
    let existing = find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;

    let function_name = data.function_name.trim().to_string();
    let code_no = data.code_no.trim().to_string();

    ensure_code_free(pool, &code_no, Some(id)).await?;
    ensure_module_exists(pool, data.module_id).await?;

    sqlx::query(
        "UPDATE function_item SET function_name = ?, code_no = ?, module_id = ?, sort_order = ?, status = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&function_name)
    .bind(&code_no)
    .bind(data.module_id)
    .bind(data.sort_order)
    .bind(data.status.unwrap_or(existing.status).as_str())
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: Status) -> RepoResult<Function> {
    let rows = sqlx::query("UPDATE function_item SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(not_found(id));
    }
    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

/// Delete a function that no role grants
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;

    let grants = count_grants(pool, id).await?;
    if grants > 0 {
        return Err(RepoError::Business(
            ErrorCode::FunctionInUse,
            format!("Function {id} is granted to {grants} role(s)"),
        ));
    }

    sqlx::query("DELETE FROM function_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
