//! Input types for the application services.
//!
//! Requests use the validator derive for field-level validation; violations
//! map to [`crate::error::AppError::Validation`] with per-field details.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Maximum validity period: one year in minutes.
pub const MAX_VALIDITY_MINUTES: u32 = 525_600;

/// Default validity period in minutes when none is requested.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// Compiled regex for custom shortcode validation.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Request to shorten a single URL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Minutes until the link stops resolving.
    #[validate(range(
        min = 1,
        max = 525_600,
        message = "Validity must be between 1 and 525600 minutes"
    ))]
    pub validity_minutes: u32,

    /// Optional custom shortcode (validated for length and characters).
    #[validate(length(min = 3, max = 10, message = "Shortcode must be 3-10 characters"))]
    #[validate(regex(
        path = "*SHORTCODE_REGEX",
        message = "Shortcode must be alphanumeric"
    ))]
    pub custom_code: Option<String>,
}

impl ShortenRequest {
    /// Request with the default validity period and a generated code.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            validity_minutes: DEFAULT_VALIDITY_MINUTES,
            custom_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ShortenRequest {
        ShortenRequest::new("https://example.com/very/long/path")
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_default_validity_is_thirty_minutes() {
        assert_eq!(valid_request().validity_minutes, 30);
    }

    #[test]
    fn test_rejects_invalid_url() {
        let mut request = valid_request();
        request.url = "not-a-url".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_validity() {
        let mut request = valid_request();
        request.validity_minutes = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_validity_over_one_year() {
        let mut request = valid_request();
        request.validity_minutes = MAX_VALIDITY_MINUTES + 1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_accepts_validity_of_exactly_one_year() {
        let mut request = valid_request();
        request.validity_minutes = MAX_VALIDITY_MINUTES;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_custom_code() {
        let mut request = valid_request();
        request.custom_code = Some("ab".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_non_alphanumeric_custom_code() {
        let mut request = valid_request();
        request.custom_code = Some("my-code".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_accepts_valid_custom_code() {
        let mut request = valid_request();
        request.custom_code = Some("promo2025".to_string());
        assert!(request.validate().is_ok());
    }
}
