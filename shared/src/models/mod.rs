//! Data models
//!
//! Shared between admin-server and the web client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); timestamps are UTC millis.
//! Wire format is camelCase.

pub mod auth;
pub mod function;
pub mod module;
pub mod navigation;
pub mod role;
pub mod status;
pub mod user;
pub mod vendor;

// Re-exports
pub use auth::*;
pub use function::*;
pub use module::*;
pub use navigation::*;
pub use role::*;
pub use status::*;
pub use user::*;
pub use vendor::*;
