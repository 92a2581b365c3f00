//! Module Repository

use std::collections::HashSet;

use super::{RepoError, RepoResult, like_pattern};
use shared::error::ErrorCode;
use shared::models::{
    Module, ModuleCreate, ModuleListItem, ModuleQuery, ModuleUpdate, ParentModuleOption, Status,
};
use shared::util::{non_blank, now_millis};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, module_name, code_no, parent_id, sort_order, status, component_name, component_path, created_at, updated_at";

fn not_found(id: i64) -> RepoError {
    RepoError::Business(ErrorCode::ModuleNotFound, format!("Module {id} not found"))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Module>> {
    let modules = sqlx::query_as::<_, Module>(&format!(
        "SELECT {COLUMNS} FROM module ORDER BY sort_order, id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(modules)
}

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Module>> {
    let modules = sqlx::query_as::<_, Module>(&format!(
        "SELECT {COLUMNS} FROM module WHERE status = 'Active' ORDER BY sort_order, id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(modules)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Module>> {
    let module = sqlx::query_as::<_, Module>(&format!("SELECT {COLUMNS} FROM module WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(module)
}

/// Code lookup (case-insensitive, the column is `COLLATE NOCASE`)
pub async fn find_by_code(pool: &SqlitePool, code_no: &str) -> RepoResult<Option<Module>> {
    let module = sqlx::query_as::<_, Module>(&format!(
        "SELECT {COLUMNS} FROM module WHERE code_no = ? LIMIT 1"
    ))
    .bind(code_no)
    .fetch_optional(pool)
    .await?;
    Ok(module)
}

/// Admin list with optional name / code substring filters
pub async fn list(pool: &SqlitePool, query: &ModuleQuery) -> RepoResult<Vec<ModuleListItem>> {
    let rows = sqlx::query_as::<_, ModuleListItem>(
        "SELECT m.id, m.module_name, m.code_no, m.parent_id, m.sort_order, m.status, \
                m.component_name, m.component_path, m.created_at, m.updated_at, \
                p.module_name AS parent_module_name \
         FROM module m LEFT JOIN module p ON p.id = m.parent_id \
         WHERE (?1 IS NULL OR m.module_name LIKE ?1) AND (?2 IS NULL OR m.code_no LIKE ?2) \
         ORDER BY m.sort_order, m.id",
    )
    .bind(like_pattern(query.module_name.as_deref()))
    .bind(like_pattern(query.code_no.as_deref()))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Active root modules, for the parent selector
pub async fn parent_options(pool: &SqlitePool) -> RepoResult<Vec<ParentModuleOption>> {
    let rows = sqlx::query_as::<_, ParentModuleOption>(
        "SELECT id, module_name FROM module WHERE parent_id IS NULL AND status = 'Active' ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn count_children(pool: &SqlitePool, id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM module WHERE parent_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_functions(pool: &SqlitePool, id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM function_item WHERE module_id = ?")
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
            ErrorCode::ModuleCodeExists,
            format!("Module code '{code_no}' already exists"),
        ));
    }
    Ok(())
}

async fn ensure_parent_exists(pool: &SqlitePool, parent_id: Option<i64>) -> RepoResult<()> {
    if let Some(pid) = parent_id
        && find_by_id(pool, pid).await?.is_none()
    {
        return Err(RepoError::Business(
            ErrorCode::ParentModuleNotFound,
            format!("Parent module {pid} not found"),
        ));
    }
    Ok(())
}

/// Whether making `new_parent` the parent of `id` would close a cycle
///
/// Walks the ancestor chain of `new_parent`; a visited set guards against
/// cycles already present in stored data.
async fn creates_cycle(pool: &SqlitePool, id: i64, new_parent: i64) -> RepoResult<bool> {
    let mut visited = HashSet::new();
    let mut current = Some(new_parent);

    while let Some(node) = current {
        if node == id {
            return Ok(true);
        }
        if !visited.insert(node) {
            return Ok(false);
        }
        current = sqlx::query_scalar::<_, Option<i64>>("SELECT parent_id FROM module WHERE id = ?")
            .bind(node)
            .fetch_optional(pool)
            .await?
            .flatten();
    }
    Ok(false)
}

pub async fn create(pool: &SqlitePool, data: ModuleCreate) -> RepoResult<Module> {
    let module_name = data.module_name.trim().to_string();
    let code_no = data.code_no.trim().to_string();

    ensure_code_free(pool, &code_no, None).await?;
    ensure_parent_exists(pool, data.parent_id).await?;

    let now = now_millis();
    let status = data.status.unwrap_or_default();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO module (module_name, code_no, parent_id, sort_order, status, component_name, component_path, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&module_name)
    .bind(&code_no)
    .bind(data.parent_id)
    .bind(data.sort_order)
    .bind(status.as_str())
    .bind(non_blank(data.component_name))
    .bind(non_blank(data.component_path))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create module".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ModuleUpdate) -> RepoResult<Module> {
    let existing = find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;

    let module_name = data.module_name.trim().to_string();
    let code_no = data.code_no.trim().to_string();

    ensure_code_free(pool, &code_no, Some(id)).await?;
    if let Some(pid) = data.parent_id {
        if pid == id || creates_cycle(pool, id, pid).await? {
            return Err(RepoError::Business(
                ErrorCode::ModuleParentCycle,
                format!("Module {pid} cannot be the parent of module {id}"),
            ));
        }
        ensure_parent_exists(pool, Some(pid)).await?;
    }

    let status = data.status.unwrap_or(existing.status);
    sqlx::query(
        "UPDATE module SET module_name = ?, code_no = ?, parent_id = ?, sort_order = ?, status = ?, \
         component_name = ?, component_path = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&module_name)
    .bind(&code_no)
    .bind(data.parent_id)
    .bind(data.sort_order)
    .bind(status.as_str())
    .bind(non_blank(data.component_name))
    .bind(non_blank(data.component_path))
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: Status) -> RepoResult<Module> {
    let rows = sqlx::query("UPDATE module SET status = ?, updated_at = ? WHERE id = ?")
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

/// Delete a module that has neither child modules nor functions.
///
/// Grants pointing at the module are removed in the same transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    find_by_id(pool, id).await?.ok_or_else(|| not_found(id))?;

    let children = count_children(pool, id).await?;
    if children > 0 {
        return Err(RepoError::Business(
            ErrorCode::ModuleHasChildren,
            format!("Module {id} has {children} child module(s)"),
        ));
    }
    let functions = count_functions(pool, id).await?;
    if functions > 0 {
        return Err(RepoError::Business(
            ErrorCode::ModuleHasFunctions,
            format!("Module {id} has {functions} function(s)"),
        ));
    }

    let mut tx = pool.begin().await.map_err(RepoError::tx)?;
    sqlx::query("DELETE FROM role_permission WHERE module_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::tx)?;
    sqlx::query("DELETE FROM module WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::tx)?;
    tx.commit().await.map_err(RepoError::tx)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::pool;

    fn payload(name: &str, code: &str, parent_id: Option<i64>) -> ModuleCreate {
        ModuleCreate {
            module_name: name.into(),
            code_no: code.into(),
            parent_id,
            sort_order: 0,
            status: None,
            component_name: None,
            component_path: None,
        }
    }

    fn edit(m: &Module, parent_id: Option<i64>) -> ModuleUpdate {
        ModuleUpdate {
            module_name: m.module_name.clone(),
            code_no: m.code_no.clone(),
            parent_id,
            sort_order: m.sort_order,
            status: None,
            component_name: m.component_name.clone(),
            component_path: m.component_path.clone(),
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_active() {
        let pool = pool().await;
        let m = create(&pool, payload(" System ", " SYS ", None)).await.unwrap();

        assert_eq!(m.module_name, "System");
        assert_eq!(m.code_no, "SYS");
        assert_eq!(m.status, Status::Active);
        assert!(m.parent_id.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_code_is_rejected_before_write() {
        let pool = pool().await;
        create(&pool, payload("System", "SYS", None)).await.unwrap();

        let err = create(&pool, payload("Other", "sys", None)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModuleCodeExists);
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_may_keep_own_code() {
        let pool = pool().await;
        let m = create(&pool, payload("System", "SYS", None)).await.unwrap();

        let mut data = edit(&m, None);
        data.module_name = "System Admin".into();
        let updated = update(&pool, m.id, data).await.unwrap();
        assert_eq!(updated.module_name, "System Admin");
    }

    #[tokio::test]
    async fn test_missing_parent_is_rejected() {
        let pool = pool().await;
        let err = create(&pool, payload("User", "USER", Some(42))).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParentModuleNotFound);
    }

    #[tokio::test]
    async fn test_parent_cycle_is_rejected() {
        let pool = pool().await;
        let root = create(&pool, payload("System", "SYS", None)).await.unwrap();
        let child = create(&pool, payload("User", "USER", Some(root.id))).await.unwrap();
        let grandchild = create(&pool, payload("Detail", "DETAIL", Some(child.id)))
            .await
            .unwrap();

        let err = update(&pool, root.id, edit(&root, Some(grandchild.id)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModuleParentCycle);

        let err = update(&pool, root.id, edit(&root, Some(root.id)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModuleParentCycle);
    }

    #[tokio::test]
    async fn test_delete_blocked_by_children_then_functions() {
        let pool = pool().await;
        let root = create(&pool, payload("System", "SYS", None)).await.unwrap();
        let child = create(&pool, payload("User", "USER", Some(root.id))).await.unwrap();

        let err = delete(&pool, root.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModuleHasChildren);

        sqlx::query("INSERT INTO function_item (function_name, code_no, module_id, created_at, updated_at) VALUES ('Add', 'USER_ADD', ?, 0, 0)")
            .bind(child.id)
            .execute(&pool)
            .await
            .unwrap();
        let err = delete(&pool, child.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModuleHasFunctions);
    }

    #[tokio::test]
    async fn test_delete_removes_grants() {
        let pool = pool().await;
        let m = create(&pool, payload("System", "SYS", None)).await.unwrap();
        sqlx::query("INSERT INTO role_permission (role_id, module_id, created_at) VALUES (1, ?, 0)")
            .bind(m.id)
            .execute(&pool)
            .await
            .unwrap();

        delete(&pool, m.id).await.unwrap();

        assert!(find_by_id(&pool, m.id).await.unwrap().is_none());
        let grants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role_permission")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(grants, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_module() {
        let pool = pool().await;
        let err = delete(&pool, 9).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ModuleNotFound);
    }

    #[tokio::test]
    async fn test_list_filters_and_parent_name() {
        let pool = pool().await;
        let root = create(&pool, payload("System", "SYS", None)).await.unwrap();
        create(&pool, payload("User Admin", "USER", Some(root.id))).await.unwrap();
        create(&pool, payload("Vendor", "VENDOR", None)).await.unwrap();

        let rows = list(
            &pool,
            &ModuleQuery {
                module_name: Some("user".into()),
                code_no: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].parent_module_name.as_deref(), Some("System"));

        let all = list(&pool, &ModuleQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_parent_options_are_active_roots() {
        let pool = pool().await;
        let root = create(&pool, payload("System", "SYS", None)).await.unwrap();
        create(&pool, payload("User", "USER", Some(root.id))).await.unwrap();
        let old = create(&pool, payload("Old", "OLD", None)).await.unwrap();
        update_status(&pool, old.id, Status::Inactive).await.unwrap();

        let options = parent_options(&pool).await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, root.id);
        assert_eq!(find_active(&pool).await.unwrap().len(), 2);
    }
}
