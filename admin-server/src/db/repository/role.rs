//! Role Repository

use super::{RepoError, RepoResult};
use shared::error::ErrorCode;
use shared::models::{Role, RoleCreate, RoleUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, role_name, status, created_at, updated_at";

pub(crate) fn not_found(id: i64) -> RepoError {
    RepoError::Business(ErrorCode::RoleNotFound, format!("Role {id} not found"))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Role>> {
    let roles = sqlx::query_as::<_, Role>(&format!("SELECT {COLUMNS} FROM role ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(roles)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>(&format!("SELECT {COLUMNS} FROM role WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(role)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Role>> {
    let role = sqlx::query_as::<_, Role>(&format!(
        "SELECT {COLUMNS} FROM role WHERE role_name = ? LIMIT 1"
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(role)
}

/// Fail with `RoleNotFound` unless the role exists
pub async fn ensure_exists(pool: &SqlitePool, id: i64) -> RepoResult<Role> {
    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

async fn ensure_name_free(pool: &SqlitePool, name: &str, exclude_id: Option<i64>) -> RepoResult<()> {
    if let Some(existing) = find_by_name(pool, name).await?
        && Some(existing.id) != exclude_id
    {
        return Err(RepoError::Business(
            ErrorCode::RoleNameExists,
            format!("Role name '{name}' already exists"),
        ));
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: RoleCreate) -> RepoResult<Role> {
    let role_name = data.role_name.trim().to_string();
    ensure_name_free(pool, &role_name, None).await?;

    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO role (role_name, status, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&role_name)
    .bind(data.status.unwrap_or_default().as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create role".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: RoleUpdate) -> RepoResult<Role> {
    let existing = ensure_exists(pool, id).await?;

    let role_name = data.role_name.trim().to_string();
    ensure_name_free(pool, &role_name, Some(id)).await?;

    sqlx::query("UPDATE role SET role_name = ?, status = ?, updated_at = ? WHERE id = ?")
        .bind(&role_name)
        .bind(data.status.unwrap_or(existing.status).as_str())
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;

    ensure_exists(pool, id).await
}

/// Delete a role and every grant that references it.
///
/// Order inside the transaction: user assignments, module grants,
/// function grants, then the role row.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    ensure_exists(pool, id).await?;

    let mut tx = pool.begin().await.map_err(RepoError::tx)?;
    for sql in [
        "DELETE FROM user_role WHERE role_id = ?",
        "DELETE FROM role_permission WHERE role_id = ?",
        "DELETE FROM role_function WHERE role_id = ?",
        "DELETE FROM role WHERE id = ?",
    ] {
        sqlx::query(sql)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(RepoError::tx)?;
    }
    tx.commit().await.map_err(RepoError::tx)?;
    Ok(())
}
