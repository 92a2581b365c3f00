//! Unified error system for the admin backend
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Module errors
//! - 4xxx: Function errors
//! - 5xxx: Role errors
//! - 6xxx: User errors
//! - 7xxx: Vendor errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ModuleHasChildren).with_detail("module_id", 12);
//! assert_eq!(err.http_status(), shared::http::StatusCode::CONFLICT);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(3003));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
