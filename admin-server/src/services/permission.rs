//! Permission Resolver
//!
//! Read side of role authorization. Every query first checks that the role
//! exists so an unknown id is reported instead of an all-unselected view.

use shared::models::{RoleFunctionItem, RoleModuleNode, RoleUserItem};
use sqlx::SqlitePool;

use crate::db::repository::grant::{self, GrantKind};
use crate::db::repository::{RepoResult, module, role};
use crate::navigation::{self, TreeNode};

/// Active module forest with `is_selected` set for modules granted to the role
pub async fn role_module_tree(
    pool: &SqlitePool,
    role_id: i64,
) -> RepoResult<Vec<TreeNode<RoleModuleNode>>> {
    role::ensure_exists(pool, role_id).await?;

    let modules = module::find_active(pool).await?;
    let granted = grant::granted_ids(pool, GrantKind::Module, role_id).await?;
    Ok(navigation::role_module_tree(modules, &granted))
}

/// Active users with `is_selected` set for members of the role
pub async fn role_users(pool: &SqlitePool, role_id: i64) -> RepoResult<Vec<RoleUserItem>> {
    role::ensure_exists(pool, role_id).await?;
    grant::role_users(pool, role_id).await
}

/// Active functions with `is_selected` set for functions granted to the role
pub async fn role_functions(pool: &SqlitePool, role_id: i64) -> RepoResult<Vec<RoleFunctionItem>> {
    role::ensure_exists(pool, role_id).await?;
    grant::role_functions(pool, role_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::pool;
    use crate::db::repository::{function, user};
    use crate::services::role_assignment;
    use shared::error::ErrorCode;
    use shared::models::{FunctionCreate, ModuleCreate, RoleCreate, Status, UserCreate};

    async fn seed_module(pool: &SqlitePool, code: &str, parent_id: Option<i64>, sort_order: i32) -> i64 {
        module::create(
            pool,
            ModuleCreate {
                module_name: format!("{code} module"),
                code_no: code.into(),
                parent_id,
                sort_order,
                status: None,
                component_name: None,
                component_path: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn seed_role(pool: &SqlitePool) -> i64 {
        role::create(
            pool,
            RoleCreate {
                role_name: "Operator".into(),
                status: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_role_module_tree_marks_granted_modules() {
        let pool = pool().await;
        let sys = seed_module(&pool, "SYS", None, 1).await;
        let user_mgmt = seed_module(&pool, "USER", Some(sys), 1).await;
        let role_mgmt = seed_module(&pool, "ROLE", Some(sys), 2).await;
        let report = seed_module(&pool, "REPORT", None, 2).await;
        let role_id = seed_role(&pool).await;

        role_assignment::set_role_modules(&pool, role_id, &[user_mgmt])
            .await
            .unwrap();

        let tree = role_module_tree(&pool, role_id).await.unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].item.id, sys);
        assert!(!tree[0].item.is_selected);
        assert!(!tree[0].item.is_leaf);

        let children = &tree[0].children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].item.id, user_mgmt);
        assert!(children[0].item.is_selected);
        assert!(children[0].item.is_leaf);
        assert_eq!(children[1].item.id, role_mgmt);
        assert!(!children[1].item.is_selected);

        assert_eq!(tree[1].item.id, report);
        assert!(tree[1].item.is_leaf);
    }

    #[tokio::test]
    async fn test_inactive_modules_are_hidden() {
        let pool = pool().await;
        let sys = seed_module(&pool, "SYS", None, 1).await;
        let child = seed_module(&pool, "USER", Some(sys), 1).await;
        module::update_status(&pool, child, Status::Inactive).await.unwrap();
        let role_id = seed_role(&pool).await;

        let tree = role_module_tree(&pool, role_id).await.unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
        assert!(tree[0].item.is_leaf);
    }

    #[tokio::test]
    async fn test_unknown_role() {
        let pool = pool().await;
        for err in [
            role_module_tree(&pool, 42).await.unwrap_err(),
            role_users(&pool, 42).await.unwrap_err(),
            role_functions(&pool, 42).await.unwrap_err(),
        ] {
            assert_eq!(err.code(), ErrorCode::RoleNotFound);
        }
    }

    #[tokio::test]
    async fn test_role_users_and_functions_flags() {
        let pool = pool().await;
        let role_id = seed_role(&pool).await;
        let mut ids = Vec::new();
        for account in ["carol", "alice", "bob"] {
            let u = user::create(
                &pool,
                UserCreate {
                    account: account.into(),
                    password: "secret1".into(),
                    name: account.into(),
                    status: None,
                },
            )
            .await
            .unwrap();
            ids.push(u.id);
        }
        role_assignment::set_role_users(&pool, role_id, &[ids[0]])
            .await
            .unwrap();

        let users = role_users(&pool, role_id).await.unwrap();
        assert_eq!(
            users.iter().map(|u| u.account.as_str()).collect::<Vec<_>>(),
            vec!["alice", "bob", "carol"]
        );
        assert!(users[2].is_selected);
        assert!(!users[0].is_selected);

        let m = seed_module(&pool, "USER", None, 1).await;
        let f = function::create(
            &pool,
            FunctionCreate {
                function_name: "Add".into(),
                code_no: "USER_ADD".into(),
                module_id: m,
                sort_order: 0,
                status: None,
            },
        )
        .await
        .unwrap();
        role_assignment::set_role_functions(&pool, role_id, &[f.id])
            .await
            .unwrap();

        let functions = role_functions(&pool, role_id).await.unwrap();
        assert_eq!(functions.len(), 1);
        assert!(functions[0].is_selected);
        assert_eq!(functions[0].module_name.as_deref(), Some("USER module"));
    }
}
