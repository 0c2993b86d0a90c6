//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. A `.env` file in the working
//! directory is honored via `dotenvy`.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LINKSTASH_STORAGE_PATH` - Path of the JSON storage blob
//!   (default: `linkstash-data.json` in the working directory)
//! - `LINKSTASH_DEFAULT_VALIDITY` - Default validity period in minutes for
//!   new links (default: 30, clamped to 1..=525600)
//! - `RUST_LOG` - Log level filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::env;
use std::path::PathBuf;

use anyhow::{Result, ensure};

use crate::application::dto::{DEFAULT_VALIDITY_MINUTES, MAX_VALIDITY_MINUTES};

/// Default file name of the storage blob.
const DEFAULT_STORAGE_FILE: &str = "linkstash-data.json";

/// Tool configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the single JSON blob holding all link records.
    pub storage_path: PathBuf,
    /// Validity period in minutes applied when a request does not specify one.
    pub default_validity_minutes: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINKSTASH_DEFAULT_VALIDITY` is set but is not a
    /// positive integer within the one-year bound.
    pub fn from_env() -> Result<Self> {
        let storage_path = env::var("LINKSTASH_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_FILE));

        let default_validity_minutes = match env::var("LINKSTASH_DEFAULT_VALIDITY") {
            Ok(raw) => {
                let minutes: u32 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("LINKSTASH_DEFAULT_VALIDITY must be a number of minutes, got {raw:?}"))?;
                ensure!(
                    (1..=MAX_VALIDITY_MINUTES).contains(&minutes),
                    "LINKSTASH_DEFAULT_VALIDITY must be between 1 and {MAX_VALIDITY_MINUTES}"
                );
                minutes
            }
            Err(_) => DEFAULT_VALIDITY_MINUTES,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            storage_path,
            default_validity_minutes,
            log_level,
            log_format,
        })
    }
}
