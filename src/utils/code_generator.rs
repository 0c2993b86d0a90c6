//! Short code generation and validation utilities.
//!
//! Provides random shortcode generation and validation for custom
//! user-provided codes.

use rand::Rng;
use serde_json::json;

use crate::error::AppError;

/// Length of generated shortcodes.
pub const CODE_LENGTH: usize = 6;

/// Minimum length of a custom shortcode.
pub const CUSTOM_CODE_MIN: usize = 3;

/// Maximum length of a custom shortcode.
pub const CUSTOM_CODE_MAX: usize = 10;

/// Alphabet for generated codes: 62 alphanumeric symbols.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 6-character alphanumeric shortcode.
///
/// Each character is drawn uniformly from `[A-Za-z0-9]`. Uniqueness is not
/// checked here; callers scan the current list and retry on collision.
///
/// # Examples
///
/// ```
/// use linkstash::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom shortcode.
///
/// # Rules
///
/// - Length: 3-10 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
///
/// # Examples
///
/// ```
/// use linkstash::utils::code_generator::validate_custom_code;
///
/// assert!(validate_custom_code("mycode123").is_ok());
/// assert!(validate_custom_code("ab").is_err());          // Too short
/// assert!(validate_custom_code("my-code").is_err());     // Hyphen
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN || code.len() > CUSTOM_CODE_MAX {
        return Err(AppError::bad_request(
            "Shortcode must be 3-10 alphanumeric characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Shortcode must be 3-10 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
