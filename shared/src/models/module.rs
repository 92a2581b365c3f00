//! Module Model
//!
//! A module is one node of the navigation / permission hierarchy.
//! `parent_id = None` marks a root.

use serde::{Deserialize, Serialize};

use super::Status;

/// Module entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: i64,
    pub module_name: String,
    /// Unique code, also the route segment (lower-cased)
    pub code_no: String,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: Status,
    /// Client component bound to this module (routable when present)
    pub component_name: Option<String>,
    pub component_path: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Admin list row: a module plus its parent's display name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ModuleListItem {
    #[cfg_attr(feature = "db", sqlx(flatten))]
    #[serde(flatten)]
    pub module: Module,
    pub parent_module_name: Option<String>,
}

/// Root module option for the parent selector
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ParentModuleOption {
    pub id: i64,
    pub module_name: String,
}

/// Query filter for module listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleQuery {
    pub module_name: Option<String>,
    pub code_no: Option<String>,
}

/// Create module payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleCreate {
    pub module_name: String,
    pub code_no: String,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub sort_order: i32,
    pub status: Option<Status>,
    pub component_name: Option<String>,
    pub component_path: Option<String>,
}

/// Update module payload (full replacement, as the edit form submits every field)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleUpdate {
    pub module_name: String,
    pub code_no: String,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub sort_order: i32,
    pub status: Option<Status>,
    pub component_name: Option<String>,
    pub component_path: Option<String>,
}
