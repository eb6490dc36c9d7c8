//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are applied
//! at the handler/repository boundary.

use shared::frame::normalize_hex;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employees, access policies, departments
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: employee codes, decimal badge codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Badge hex-codes (field readers emit 4-16 hex chars; allow headroom)
pub const MAX_HEX_LEN: usize = 32;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
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
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate and normalize a badge hex-code (trim, uppercase, hex digits only).
pub fn validate_badge_hex(code: &str) -> Result<String, AppError> {
    let code = normalize_hex(code);
    if code.is_empty() {
        return Err(AppError::validation("Badge hex-code must not be empty"));
    }
    if code.len() > MAX_HEX_LEN {
        return Err(AppError::validation(format!(
            "Badge hex-code is too long ({} chars, max {MAX_HEX_LEN})",
            code.len()
        )));
    }
    if !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AppError::validation(format!(
            "Badge hex-code contains non-hex characters: '{code}'"
        )));
    }
    Ok(code)
}
