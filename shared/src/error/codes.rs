//! Unified error codes for the admin backend
//!
//! This module defines all error codes shared by admin-server and the web client.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Module errors
//! - 4xxx: Function errors
//! - 5xxx: Role errors
//! - 6xxx: User errors
//! - 7xxx: Vendor errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (account/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,
    /// Password too short
    PasswordTooShort = 1008,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Cannot delete the built-in admin account
    CannotDeleteAdmin = 2005,
    /// Cannot rename or disable the built-in admin account
    CannotModifyAdmin = 2006,

    // ==================== 3xxx: Module ====================
    /// Module not found
    ModuleNotFound = 3001,
    /// Module code already exists
    ModuleCodeExists = 3002,
    /// Module still has child modules
    ModuleHasChildren = 3003,
    /// Module still has functions bound to it
    ModuleHasFunctions = 3004,
    /// Parent module not found
    ParentModuleNotFound = 3005,
    /// Parent would create a cycle
    ModuleParentCycle = 3006,

    // ==================== 4xxx: Function ====================
    /// Function not found
    FunctionNotFound = 4001,
    /// Function code already exists
    FunctionCodeExists = 4002,
    /// Function is granted to a role
    FunctionInUse = 4003,

    // ==================== 5xxx: Role ====================
    /// Role not found
    RoleNotFound = 5001,
    /// Role name already exists
    RoleNameExists = 5002,

    // ==================== 6xxx: User ====================
    /// User not found
    UserNotFound = 6001,
    /// Account already exists
    AccountExists = 6002,

    // ==================== 7xxx: Vendor ====================
    /// Vendor not found
    VendorNotFound = 7001,
    /// Vendor code already exists
    VendorCodeExists = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
    /// Transaction failed and was rolled back
    TransactionFailed = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid account or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::PasswordTooShort => "Password is too short",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::CannotDeleteAdmin => "Cannot delete the admin account",
            ErrorCode::CannotModifyAdmin => "Cannot rename or disable the admin account",

            // Module
            ErrorCode::ModuleNotFound => "Module not found",
            ErrorCode::ModuleCodeExists => "Module code already exists",
            ErrorCode::ModuleHasChildren => "Module has child modules",
            ErrorCode::ModuleHasFunctions => "Module has functions",
            ErrorCode::ParentModuleNotFound => "Parent module not found",
            ErrorCode::ModuleParentCycle => "Parent module would create a cycle",

            // Function
            ErrorCode::FunctionNotFound => "Function not found",
            ErrorCode::FunctionCodeExists => "Function code already exists",
            ErrorCode::FunctionInUse => "Function is granted to a role",

            // Role
            ErrorCode::RoleNotFound => "Role not found",
            ErrorCode::RoleNameExists => "Role name already exists",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::AccountExists => "Account already exists",

            // Vendor
            ErrorCode::VendorNotFound => "Vendor not found",
            ErrorCode::VendorCodeExists => "Vendor code already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::TransactionFailed => "Transaction failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1007 => Ok(ErrorCode::AccountDisabled),
            1008 => Ok(ErrorCode::PasswordTooShort),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2005 => Ok(ErrorCode::CannotDeleteAdmin),
            2006 => Ok(ErrorCode::CannotModifyAdmin),

            // Module
            3001 => Ok(ErrorCode::ModuleNotFound),
            3002 => Ok(ErrorCode::ModuleCodeExists),
            3003 => Ok(ErrorCode::ModuleHasChildren),
            3004 => Ok(ErrorCode::ModuleHasFunctions),
            3005 => Ok(ErrorCode::ParentModuleNotFound),
            3006 => Ok(ErrorCode::ModuleParentCycle),

            // Function
            4001 => Ok(ErrorCode::FunctionNotFound),
            4002 => Ok(ErrorCode::FunctionCodeExists),
            4003 => Ok(ErrorCode::FunctionInUse),

            // Role
            5001 => Ok(ErrorCode::RoleNotFound),
            5002 => Ok(ErrorCode::RoleNameExists),

            // User
            6001 => Ok(ErrorCode::UserNotFound),
            6002 => Ok(ErrorCode::AccountExists),

            // Vendor
            7001 => Ok(ErrorCode::VendorNotFound),
            7002 => Ok(ErrorCode::VendorCodeExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),
            9004 => Ok(ErrorCode::TransactionFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ErrorCode] = &[
        ErrorCode::Success,
        ErrorCode::Unknown,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::RequiredField,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::TokenExpired,
        ErrorCode::TokenInvalid,
        ErrorCode::AccountDisabled,
        ErrorCode::PasswordTooShort,
        ErrorCode::PermissionDenied,
        ErrorCode::CannotDeleteAdmin,
        ErrorCode::CannotModifyAdmin,
        ErrorCode::ModuleNotFound,
        ErrorCode::ModuleCodeExists,
        ErrorCode::ModuleHasChildren,
        ErrorCode::ModuleHasFunctions,
        ErrorCode::ParentModuleNotFound,
        ErrorCode::ModuleParentCycle,
        ErrorCode::FunctionNotFound,
        ErrorCode::FunctionCodeExists,
        ErrorCode::FunctionInUse,
        ErrorCode::RoleNotFound,
        ErrorCode::RoleNameExists,
        ErrorCode::UserNotFound,
        ErrorCode::AccountExists,
        ErrorCode::VendorNotFound,
        ErrorCode::VendorCodeExists,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
        ErrorCode::ConfigError,
        ErrorCode::TransactionFailed,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::CannotDeleteAdmin.code(), 2005);
        assert_eq!(ErrorCode::CannotModifyAdmin.code(), 2006);
        assert_eq!(ErrorCode::ModuleHasChildren.code(), 3003);
        assert_eq!(ErrorCode::ModuleHasFunctions.code(), 3004);
        assert_eq!(ErrorCode::FunctionInUse.code(), 4003);
        assert_eq!(ErrorCode::RoleNotFound.code(), 5001);
        assert_eq!(ErrorCode::AccountExists.code(), 6002);
        assert_eq!(ErrorCode::VendorCodeExists.code(), 7002);
        assert_eq!(ErrorCode::TransactionFailed.code(), 9004);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::ModuleNotFound.is_success());
    }

    #[test]
    fn test_try_from_covers_every_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(3999), Err(InvalidErrorCode(3999)));
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::Success).unwrap(), "0");
        assert_eq!(
            serde_json::to_string(&ErrorCode::ModuleCodeExists).unwrap(),
            "3002"
        );
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("5002").unwrap();
        assert_eq!(code, ErrorCode::RoleNameExists);

        let result: Result<ErrorCode, _> = serde_json::from_str("8001");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_messages_distinguish_delete_blockers() {
        assert_ne!(
            ErrorCode::ModuleHasChildren.message(),
            ErrorCode::ModuleHasFunctions.message()
        );
        assert_ne!(
            ErrorCode::ModuleCodeExists.message(),
            ErrorCode::ModuleHasChildren.message()
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
