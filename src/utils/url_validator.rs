//! URL validation.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Validates that a string parses as an absolute http(s) URL.
///
/// The URL is stored exactly as submitted; only parsing and the scheme are
/// checked here.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the input does not parse or uses a
/// scheme other than `http` / `https`.
pub fn validate_http_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "url": raw, "reason": e.to_string() }),
        )
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::bad_request(
            "URL must use http or https",
            json!({ "url": raw, "scheme": other }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_http_url("http://example.com").is_ok());
        assert!(validate_http_url("https://example.com/some/long/path?q=1").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(validate_http_url("ftp://example.com").is_err());
        assert!(validate_http_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_rejects_non_urls() {
        assert!(validate_http_url("not a url").is_err());
        assert!(validate_http_url("").is_err());
        assert!(validate_http_url("example.com").is_err());
    }
}
