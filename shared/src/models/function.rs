//! Function Model (module-scoped permission unit)

use serde::{Deserialize, Serialize};

use super::Status;

/// Function entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub id: i64,
    pub function_name: String,
    pub code_no: String,
    pub module_id: i64,
    pub sort_order: i32,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Admin list row: a function plus the owning module's name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct FunctionListItem {
    #[cfg_attr(feature = "db", sqlx(flatten))]
    #[serde(flatten)]
    pub function: Function,
    pub module_name: Option<String>,
}

/// Query filter for function listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionQuery {
    pub function_name: Option<String>,
    pub code_no: Option<String>,
}

/// Create function payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCreate {
    pub function_name: String,
    pub code_no: String,
    pub module_id: i64,
    #[serde(default)]
    pub sort_order: i32,
    pub status: Option<Status>,
}

/// Update function payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUpdate {
    pub function_name: String,
    pub code_no: String,
    pub module_id: i64,
    #[serde(default)]
    pub sort_order: i32,
    pub status: Option<Status>,
}
