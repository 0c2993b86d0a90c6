//! Crate-wide error type.
//!
//! Every fallible operation in the library returns [`AppError`]. Variants carry
//! a human-readable message plus structured JSON details for logging and
//! machine-readable output.

use serde_json::Value;

/// Application error with a message and structured details.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed validation (bad URL, validity out of range, malformed code).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No link matches the requested shortcode.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The link exists but its validity period has elapsed.
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// A custom shortcode is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Storage write failure or exhausted code generation.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Expired { .. } => "expired",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Structured details attached to the error.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Expired { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::Validation {
            message: "Validation failed".to_string(),
            details,
        }
    }
}
