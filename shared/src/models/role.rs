//! Role Model
//!
//! Roles bundle module grants and are assigned to users. The
//! `RoleModuleNode` / `RoleUserItem` / `RoleFunctionItem` rows are the
//! annotated views returned by the permission editor.

use serde::{Deserialize, Serialize};

use super::Status;

/// Role entity (RBAC 角色)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCreate {
    pub role_name: String,
    pub status: Option<Status>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub role_name: String,
    pub status: Option<Status>,
}

/// One module of the permission-editor tree
///
/// `is_leaf` is derived from the full active module set, not from the
/// children that happen to survive tree building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModuleNode {
    pub id: i64,
    pub module_name: String,
    pub code_no: String,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub is_selected: bool,
    pub is_leaf: bool,
}

/// Active user annotated with membership in a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct RoleUserItem {
    pub id: i64,
    pub account: String,
    pub name: String,
    pub is_selected: bool,
}

/// Active function annotated with a legacy role grant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct RoleFunctionItem {
    pub id: i64,
    pub function_name: String,
    pub code_no: String,
    pub module_id: i64,
    pub module_name: Option<String>,
    pub is_selected: bool,
}

/// `PUT /api/roles/{id}/modules` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModulesUpdate {
    #[serde(default)]
    pub module_ids: Vec<i64>,
}

/// `PUT /api/roles/{id}/users` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUsersUpdate {
    #[serde(default)]
    pub user_ids: Vec<i64>,
}

/// `PUT /api/roles/{id}/functions` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFunctionsUpdate {
    #[serde(default)]
    pub function_ids: Vec<i64>,
}
