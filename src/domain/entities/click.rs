//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A click event recorded when a shortened link is resolved.
///
/// Captures metadata about each redirect for the statistics view. The geo
/// label is a coarse, randomly assigned placeholder, not real geolocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub referer: String,
    pub user_agent: String,
    pub geo: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        timestamp: DateTime<Utc>,
        referer: String,
        user_agent: String,
        geo: String,
    ) -> Self {
        Self {
            timestamp,
            referer,
            user_agent,
            geo,
        }
    }
}
