//! Role Assignment
//!
//! Replace-all writes for a role's module, user and function grants.
//! Each call runs in one transaction: either the new set is stored in full
//! or the previous set is left untouched.

use std::collections::BTreeSet;

use sqlx::SqlitePool;

use crate::db::repository::grant::{self, GrantKind};
use crate::db::repository::{RepoError, RepoResult, role};

async fn replace_grants(
    pool: &SqlitePool,
    kind: GrantKind,
    role_id: i64,
    ids: &[i64],
) -> RepoResult<usize> {
    role::ensure_exists(pool, role_id).await?;

    // 重复 id 只写一行
    let ids: BTreeSet<i64> = ids.iter().copied().collect();

    let mut tx = pool.begin().await.map_err(RepoError::tx)?;
    grant::replace(&mut tx, kind, role_id, &ids).await?;
    tx.commit().await.map_err(RepoError::tx)?;

    tracing::debug!(role_id, kind = ?kind, count = ids.len(), "Role grants replaced");
    Ok(ids.len())
}

/// Replace the modules granted to a role; returns the number of distinct ids stored
pub async fn set_role_modules(pool: &SqlitePool, role_id: i64, module_ids: &[i64]) -> RepoResult<usize> {
    replace_grants(pool, GrantKind::Module, role_id, module_ids).await
}

/// Replace the users holding a role
pub async fn set_role_users(pool: &SqlitePool, role_id: i64, user_ids: &[i64]) -> RepoResult<usize> {
    replace_grants(pool, GrantKind::User, role_id, user_ids).await
}

/// Replace the functions granted to a role
pub async fn set_role_functions(
    pool: &SqlitePool,
    role_id: i64,
    function_ids: &[i64],
) -> RepoResult<usize> {
    replace_grants(pool, GrantKind::Function, role_id, function_ids).await
}
