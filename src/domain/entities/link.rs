//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Click;

/// A shortened URL record with its embedded click history.
///
/// Serializes to the camelCase field names used in the persisted JSON blob,
/// so stored data stays readable and stable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub original_url: String,
    pub shortcode: String,
    /// Validity period in minutes from creation.
    #[serde(rename = "validityPeriod")]
    pub validity_minutes: u32,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "expiryTime")]
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub clicks: Vec<Click>,
}

impl Link {
    /// Creates a new Link with an empty click history.
    ///
    /// The expiry time is always `created_at` plus the validity period, so the
    /// two fields can never drift apart.
    pub fn new(
        original_url: String,
        shortcode: String,
        validity_minutes: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let expires_at = created_at + Duration::minutes(i64::from(validity_minutes));
        Self {
            original_url,
            shortcode,
            validity_minutes,
            created_at,
            expires_at,
            clicks: Vec::new(),
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Total number of recorded clicks.
    pub fn click_count(&self) -> usize {
        self.clicks.len()
    }
}
