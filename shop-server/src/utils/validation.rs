//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, customer
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, inquiry messages
pub const MAX_NOTE_LEN: usize = 2000;

/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Digits in a login phone number
pub const PHONE_DIGITS: usize = 10;

// ── Numeric limits ──────────────────────────────────────────────────

/// Largest quantity a single cart line may hold
pub const MAX_QUANTITY: u32 = 100_000;

/// Largest variant price (rupees)
pub const MAX_PRICE: i64 = 10_000_000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit (may be empty).
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_rejects_blank() {
        let err = validate_required_text("   ", "address", MAX_ADDRESS_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(validate_required_text("Wyra Rd", "address", MAX_ADDRESS_LEN).is_ok());
    }

    #[test]
    fn test_too_long() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("9999999999"));
        assert!(!is_valid_phone("99999"));
        assert!(!is_valid_phone("99999x9999"));
        assert!(!is_valid_phone("+919999999999"));
    }
}
