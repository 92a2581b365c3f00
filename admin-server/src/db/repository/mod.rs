//! Repository Module
//!
//! Free async functions over `&SqlitePool`, one file per table family.
//! Multi-table writes take an explicit `sqlx::Transaction`.

pub mod function;
pub mod grant;
pub mod module;
pub mod role;
pub mod user;
pub mod vendor;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Business rule violation with a specific error code
    #[error("{1}")]
    Business(ErrorCode, String),

    #[error("Database error: {0}")]
    Database(String),

    /// A statement inside a transaction failed; the transaction was rolled back
    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl RepoError {
    /// Error code this failure surfaces as
    pub fn code(&self) -> ErrorCode {
        match self {
            RepoError::NotFound(_) => ErrorCode::NotFound,
            RepoError::Duplicate(_) => ErrorCode::AlreadyExists,
            RepoError::Business(code, _) => *code,
            RepoError::Database(_) => ErrorCode::DatabaseError,
            RepoError::Transaction(_) => ErrorCode::TransactionFailed,
            RepoError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }

    /// Map a failed statement inside a transaction
    pub fn tx(err: sqlx::Error) -> Self {
        RepoError::Transaction(err.to_string())
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Business(code, msg) => AppError::with_message(code, msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository database error");
                AppError::database("Database error")
            }
            RepoError::Transaction(msg) => {
                tracing::error!(error = %msg, "Transaction rolled back");
                AppError::transaction_failed("Transaction failed and was rolled back")
            }
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// `LIKE` pattern for an optional substring filter (`None` matches everything)
pub(crate) fn like_pattern(filter: Option<&str>) -> Option<String> {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| format!("%{f}%"))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern(None), None);
        assert_eq!(like_pattern(Some("  ")), None);
        assert_eq!(like_pattern(Some(" sys ")), Some("%sys%".to_string()));
    }

    #[test]
    fn test_repo_error_codes() {
        assert_eq!(RepoError::NotFound("x".into()).code(), ErrorCode::NotFound);
        assert_eq!(
            RepoError::Business(ErrorCode::ModuleHasChildren, "x".into()).code(),
            ErrorCode::ModuleHasChildren
        );
        assert_eq!(
            RepoError::Transaction("x".into()).code(),
            ErrorCode::TransactionFailed
        );
    }

    #[test]
    fn test_into_app_error_keeps_business_code() {
        let err: AppError =
            RepoError::Business(ErrorCode::FunctionInUse, "Function is granted".into()).into();
        assert_eq!(err.code, ErrorCode::FunctionInUse);
        assert_eq!(err.message, "Function is granted");

        let err: AppError = RepoError::Database("disk I/O".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database error");
    }
}
