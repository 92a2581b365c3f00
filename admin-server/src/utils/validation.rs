//! Input validation helpers
//!
//! Centralized text length limits and checks used by the CRUD handlers.
//! SQLite TEXT has no built-in length enforcement.

use shared::AppError;
use validator::ValidateEmail;

use crate::auth::password::MIN_PASSWORD_LEN;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: module, function, role, user, company
pub const MAX_NAME_LEN: usize = 200;

/// Codes and short identifiers: code_no, account, vendor code, phone
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Front-end component paths
pub const MAX_PATH_LEN: usize = 500;

/// Addresses, payment terms
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate an optional email; blank counts as absent
pub fn validate_optional_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    validate_optional_text(value, field, MAX_EMAIL_LEN)?;
    if let Some(v) = value
        && !v.trim().is_empty()
        && !v.trim().validate_email()
    {
        return Err(AppError::validation(format!("{field} is not a valid email address"))
            .with_detail("field", field));
    }
    Ok(())
}

/// Validate a new password's length
pub fn validate_password(value: &str) -> Result<(), AppError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(shared::ErrorCode::PasswordTooShort));
    }
    if value.chars().count() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN})"
        )));
    }
    Ok(())
}

/// Validate a list of row ids: every id must be positive
pub fn validate_ids(ids: &[i64], field: &str) -> Result<(), AppError> {
    if let Some(&bad) = ids.iter().find(|&&id| id <= 0) {
        return Err(AppError::validation(format!("{field} contains invalid id {bad}"))
            .with_detail("field", field)
            .with_detail("id", bad));
    }
    Ok(())
}
