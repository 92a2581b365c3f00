//! User Model

use serde::{Deserialize, Serialize};

use super::Status;

/// Account name that can never be deleted
pub const ADMIN_ACCOUNT: &str = "admin";

/// User entity (password hash never leaves the server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub account: String,
    pub name: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: Status,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Query filter for user listing (case-insensitive substring)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub account: Option<String>,
    pub name: Option<String>,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub account: String,
    pub password: String,
    pub name: String,
    pub status: Option<Status>,
}

/// Update user payload; the password is only changed when present
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub account: String,
    pub name: String,
    pub password: Option<String>,
    pub status: Option<Status>,
}
