//! Shared utilities: code generation, click metadata, URL validation.

pub mod code_generator;
pub mod source_info;
pub mod url_validator;
