//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Module errors
/// - 4xxx: Function errors
/// - 5xxx: Role errors
/// - 6xxx: User errors
/// - 7xxx: Vendor errors
/// - 8xxx, 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Module errors (3xxx)
    Module,
    /// Function errors (4xxx)
    Function,
    /// Role errors (5xxx)
    Role,
    /// User errors (6xxx)
    User,
    /// Vendor errors (7xxx)
    Vendor,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Module,
            4000..5000 => Self::Function,
            5000..6000 => Self::Role,
            6000..7000 => Self::User,
            7000..8000 => Self::Vendor,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Module => "module",
            Self::Function => "function",
            Self::Role => "role",
            Self::User => "user",
            Self::Vendor => "vendor",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Module);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Function);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Role);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::User);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Vendor);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenExpired.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::ModuleHasChildren.category(),
            ErrorCategory::Module
        );
        assert_eq!(ErrorCode::FunctionInUse.category(), ErrorCategory::Function);
        assert_eq!(ErrorCode::RoleNotFound.category(), ErrorCategory::Role);
        assert_eq!(ErrorCode::AccountExists.category(), ErrorCategory::User);
        assert_eq!(ErrorCode::VendorNotFound.category(), ErrorCategory::Vendor);
        assert_eq!(
            ErrorCode::TransactionFailed.category(),
            ErrorCategory::System
        );
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Module).unwrap();
        assert_eq!(json, "\"module\"");

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
        assert_eq!(category.name(), "system");
    }
}
