//! User Repository

use super::{RepoError, RepoResult, like_pattern};
use crate::auth::password::{MIN_PASSWORD_LEN, hash_password};
use shared::error::ErrorCode;
use shared::models::{ADMIN_ACCOUNT, Status, User, UserCreate, UserQuery, UserUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, account, name, status, created_at, updated_at";

/// User row plus its password hash (login only, never serialized)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

fn not_found(id: i64) -> RepoError {
    RepoError::Business(ErrorCode::UserNotFound, format!("User {id} not found"))
}

fn hash(password: &str) -> RepoResult<String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RepoError::Business(
            ErrorCode::PasswordTooShort,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    hash_password(password).map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_account(pool: &SqlitePool, account: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user WHERE account = ? LIMIT 1"
    ))
    .bind(account)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_credentials(pool: &SqlitePool, account: &str) -> RepoResult<Option<UserCredentials>> {
    let row = sqlx::query_as::<_, UserCredentials>(&format!(
        "SELECT {COLUMNS}, password_hash FROM user WHERE account = ? LIMIT 1"
    ))
    .bind(account)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// List with case-insensitive account / name substring filters, ordered by id
pub async fn list(pool: &SqlitePool, query: &UserQuery) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user \
         WHERE (?1 IS NULL OR LOWER(account) LIKE LOWER(?1)) AND (?2 IS NULL OR LOWER(name) LIKE LOWER(?2)) \
         ORDER BY id"
    ))
    .bind(like_pattern(query.account.as_deref()))
    .bind(like_pattern(query.name.as_deref()))
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

async fn ensure_account_free(pool: &SqlitePool, account: &str, exclude_id: Option<i64>) -> RepoResult<()> {
    if let Some(existing) = find_by_account(pool, account).await?
        && Some(existing.id) != exclude_id
    {
        return Err(RepoError::Business(
            ErrorCode::AccountExists,
            format!("Account '{account}' already exists"),
        ));
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let account = data.account.trim().to_string();
    ensure_account_free(pool, &account, None).await?;

    let password_hash = hash(&data.password)?;
    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO user (account, password_hash, name, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&account)
    .bind(&password_hash)
    .bind(data.name.trim())
    .bind(data.status.unwrap_or_default().as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Update profile fields; the password hash is replaced only when a new password is given.
///
/// The `admin` account keeps its name and stays active, so it can never be
/// turned into an ordinary, deletable user.
pub async fn update(pool: &SqlitePool, id: i64, data: UserUpdate) -> RepoResult<User> {
    let existing = find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;

    let account = data.account.trim().to_string();
    if existing.account == ADMIN_ACCOUNT
        && (account != ADMIN_ACCOUNT || data.status == Some(Status::Inactive))
    {
        return Err(RepoError::Business(
            ErrorCode::CannotModifyAdmin,
            "The admin account cannot be renamed or disabled".into(),
        ));
    }
    ensure_account_free(pool, &account, Some(id)).await?;

    let password_hash = match data.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => Some(hash(password)?),
        None => None,
    };

    sqlx::query(
        "UPDATE user SET account = ?1, name = ?2, status = ?3, \
         password_hash = COALESCE(?4, password_hash), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&account)
    .bind(data.name.trim())
    .bind(data.status.unwrap_or(existing.status).as_str())
    .bind(password_hash)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

/// Delete a user and its role assignments. The admin account is undeletable.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let existing = find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;
    if existing.account == ADMIN_ACCOUNT {
        return Err(RepoError::Business(
            ErrorCode::CannotDeleteAdmin,
            "The admin account cannot be deleted".into(),
        ));
    }

    let mut tx = pool.begin().await.map_err(RepoError::tx)?;
    sqlx::query("DELETE FROM user_role WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::tx)?;
    sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::tx)?;
    tx.commit().await.map_err(RepoError::tx)?;
    Ok(())
}

/// Create the `admin` account when the user table is empty
pub async fn ensure_admin(pool: &SqlitePool, password: &str) -> RepoResult<Option<User>> {
    if count(pool).await? > 0 {
        return Ok(None);
    }
    let admin = create(
        pool,
        UserCreate {
            account: ADMIN_ACCOUNT.into(),
            password: password.into(),
            name: "Administrator".into(),
            status: Some(Status::Active),
        },
    )
    .await?;
    Ok(Some(admin))
}
