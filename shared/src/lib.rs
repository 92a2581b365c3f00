//! Shared types for the admin backend
//!
//! Wire models, the unified error system and small utilities used by
//! admin-server and mirrored by the web client.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
