//! Link creation and listing service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::ShortenRequest;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_http_url;

/// Upper bound on generate-and-retry attempts for a unique code.
///
/// The 62^6 code space makes repeated collisions vanishingly unlikely at the
/// scale of a local tool, but the loop is still capped.
const MAX_ATTEMPTS: usize = 16;

/// Service for creating and listing shortened links.
///
/// Handles request validation, shortcode generation with uniqueness checking,
/// and expiry computation.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> LinkService<S> {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a shortened link from a validated request.
    ///
    /// # Code selection
    ///
    /// - If `custom_code` is provided, it is validated and used, or a conflict
    ///   error is returned when already taken.
    /// - Otherwise a random 6-character code is generated and re-drawn on
    ///   collision, up to a fixed retry cap.
    ///
    /// The record's expiry is always its creation time plus the requested
    /// validity period.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL, validity period, or custom
    /// code is invalid, [`AppError::Conflict`] if the custom code is taken,
    /// and [`AppError::Internal`] on storage write failure or retry exhaustion.
    pub fn shorten(&self, request: ShortenRequest) -> Result<Link, AppError> {
        request.validate()?;
        validate_http_url(&request.url)?;

        let code = if let Some(custom) = request.custom_code {
            validate_custom_code(&custom)?;

            if self.store.find_by_code(&custom).is_some() {
                warn!(shortcode = %custom, "custom shortcode already in use");
                return Err(AppError::conflict(
                    "This shortcode is already in use",
                    json!({ "code": custom }),
                ));
            }

            custom
        } else {
            self.generate_unique_code()?
        };

        let link = Link::new(request.url, code, request.validity_minutes, Utc::now());
        let link = self.store.create(link)?;

        info!(
            shortcode = %link.shortcode,
            original_url = %link.original_url,
            expires_at = %link.expires_at,
            "URL shortened"
        );
        Ok(link)
    }

    /// Returns all stored links in insertion order.
    pub fn list_links(&self) -> Vec<Link> {
        self.store.list_all()
    }

    /// Deletes every stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage blob cannot be removed.
    pub fn clear_all(&self) -> Result<(), AppError> {
        self.store.clear_all()?;
        info!("all stored links cleared");
        Ok(())
    }

    /// Generates a shortcode not present in the current list.
    ///
    /// Re-draws on collision, up to [`MAX_ATTEMPTS`] times.
    fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.store.find_by_code(&code).is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
