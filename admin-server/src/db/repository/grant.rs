//! Grant Repository
//!
//! Role ↔ module / user / function join tables. Writes are replace-all and
//! always run on a caller-owned transaction.

use std::collections::{BTreeSet, HashSet};

use super::{RepoError, RepoResult};
use shared::models::{RoleFunctionItem, RoleUserItem};
use shared::util::now_millis;
use sqlx::{Sqlite, SqlitePool, Transaction};

/// One of the role grant tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantKind {
    /// `role_permission.module_id`
    Module,
    /// `user_role.user_id`
    User,
    /// `role_function.function_id`
    Function,
}

impl GrantKind {
    const fn table(self) -> &'static str {
        match self {
            GrantKind::Module => "role_permission",
            GrantKind::User => "user_role",
            GrantKind::Function => "role_function",
        }
    }

    const fn column(self) -> &'static str {
        match self {
            GrantKind::Module => "module_id",
            GrantKind::User => "user_id",
            GrantKind::Function => "function_id",
        }
    }
}

/// Ids granted to a role in one grant table
pub async fn granted_ids(pool: &SqlitePool, kind: GrantKind, role_id: i64) -> RepoResult<HashSet<i64>> {
    let ids: Vec<i64> = sqlx::query_scalar(&format!(
        "SELECT {} FROM {} WHERE role_id = ?",
        kind.column(),
        kind.table()
    ))
    .bind(role_id)
    .fetch_all(pool)
    .await?;
    Ok(ids.into_iter().collect())
}

/// Replace a role's grants: delete every row, then insert one per id.
///
/// Nothing is committed here; dropping the transaction undoes the delete.
pub async fn replace(
    tx: &mut Transaction<'_, Sqlite>,
    kind: GrantKind,
    role_id: i64,
    ids: &BTreeSet<i64>,
) -> RepoResult<()> {
    sqlx::query(&format!("DELETE FROM {} WHERE role_id = ?", kind.table()))
        .bind(role_id)
        .execute(&mut **tx)
        .await
        .map_err(RepoError::tx)?;

    if ids.is_empty() {
        return Ok(());
    }

    let insert = format!(
        "INSERT INTO {} (role_id, {}, created_at) VALUES (?, ?, ?)",
        kind.table(),
        kind.column()
    );
    let now = now_millis();
    for id in ids {
        sqlx::query(&insert)
            .bind(role_id)
            .bind(id)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(RepoError::tx)?;
    }
    Ok(())
}

/// Active users ordered by account, flagged when they hold the role
pub async fn role_users(pool: &SqlitePool, role_id: i64) -> RepoResult<Vec<RoleUserItem>> {
    let rows = sqlx::query_as::<_, RoleUserItem>(
        "SELECT u.id, u.account, u.name, \
                EXISTS (SELECT 1 FROM user_role ur WHERE ur.role_id = ?1 AND ur.user_id = u.id) AS is_selected \
         FROM user u WHERE u.status = 'Active' ORDER BY u.account",
    )
    .bind(role_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Active functions ordered by module then function, flagged when granted to the role
pub async fn role_functions(pool: &SqlitePool, role_id: i64) -> RepoResult<Vec<RoleFunctionItem>> {
    let rows = sqlx::query_as::<_, RoleFunctionItem>(
        "SELECT f.id, f.function_name, f.code_no, f.module_id, m.module_name, \
                EXISTS (SELECT 1 FROM role_function rf WHERE rf.role_id = ?1 AND rf.function_id = f.id) AS is_selected \
         FROM function_item f LEFT JOIN module m ON m.id = f.module_id \
         WHERE f.status = 'Active' \
         ORDER BY m.sort_order, f.sort_order, f.id",
    )
    .bind(role_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::pool;
    use shared::error::ErrorCode;

    async fn replace_committed(pool: &SqlitePool, kind: GrantKind, role_id: i64, ids: &[i64]) -> RepoResult<()> {
        let ids: BTreeSet<i64> = ids.iter().copied().collect();
        let mut tx = pool.begin().await?;
        replace(&mut tx, kind, role_id, &ids).await?;
        tx.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_replace_overwrites_previous_rows() {
        let pool = pool().await;
        replace_committed(&pool, GrantKind::Module, 1, &[1, 2, 3]).await.unwrap();
        replace_committed(&pool, GrantKind::Module, 1, &[3, 4]).await.unwrap();
        replace_committed(&pool, GrantKind::Module, 2, &[1]).await.unwrap();

        assert_eq!(
            granted_ids(&pool, GrantKind::Module, 1).await.unwrap(),
            HashSet::from([3, 4])
        );
        assert_eq!(
            granted_ids(&pool, GrantKind::Module, 2).await.unwrap(),
            HashSet::from([1])
        );
    }

    #[tokio::test]
    async fn test_replace_with_empty_set_clears() {
        let pool = pool().await;
        replace_committed(&pool, GrantKind::User, 1, &[5, 6]).await.unwrap();
        replace_committed(&pool, GrantKind::User, 1, &[]).await.unwrap();
        assert!(granted_ids(&pool, GrantKind::User, 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_insert_reports_transaction_error() {
        let pool = pool().await;
        let err = replace_committed(&pool, GrantKind::Function, 1, &[-1])
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::TransactionFailed);
    }
}
