//! Shortcode resolution and click tracking service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::source_info::capture_click;

/// Outcome of a successful resolution: where to navigate plus the click that
/// was recorded for it.
#[derive(Debug, Clone)]
pub struct Redirect {
    pub location: String,
    pub click: Click,
}

/// Service resolving shortcodes to their original URLs.
///
/// A successful resolve records a synthesized click event before yielding the
/// navigation target. Codes are never consumed or rate-limited.
pub struct RedirectService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> RedirectService<S> {
    /// Creates a new redirect service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a shortcode to its original URL, recording a click.
    ///
    /// The click event carries the current timestamp, the referrer (defaulting
    /// to `"Direct"`), the user agent, and a random coarse geo label.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Expired`] once the validity period has elapsed; an expired
    /// code never yields a redirect and records no click.
    pub fn resolve(
        &self,
        code: &str,
        referer: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Redirect, AppError> {
        let link = self.lookup(code)?;

        if link.is_expired() {
            warn!(shortcode = %code, expires_at = %link.expires_at, "link expired");
            return Err(AppError::expired(
                "This link has expired",
                json!({ "code": code, "expiryTime": link.expires_at }),
            ));
        }

        let click = capture_click(referer, user_agent);
        let recorded = self.store.record_click(code, click.clone())?;
        if !recorded {
            // Record vanished between lookup and click write; redirect anyway.
            warn!(shortcode = %code, "click not recorded");
        }

        info!(shortcode = %code, original_url = %link.original_url, "redirecting");
        Ok(Redirect {
            location: link.original_url,
            click,
        })
    }

    fn lookup(&self, code: &str) -> Result<Link, AppError> {
        self.store.find_by_code(code).ok_or_else(|| {
            warn!(shortcode = %code, "shortcode not found");
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }
}
