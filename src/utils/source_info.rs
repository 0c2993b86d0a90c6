//! Click metadata synthesis.
//!
//! Builds the [`Click`] event recorded on every successful resolve: current
//! timestamp, referrer, user agent, and a coarse geo label.

use chrono::Utc;
use rand::Rng;

use crate::domain::entities::Click;

/// Referrer recorded when none is supplied.
pub const DIRECT_REFERER: &str = "Direct";

/// Fixed set of coarse geo labels assigned randomly to clicks.
///
/// This is a placeholder for real geolocation, which is out of scope.
pub const GEO_LABELS: [&str; 8] = [
    "India",
    "USA",
    "UK",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Japan",
];

/// User agent recorded when the caller supplies none.
const DEFAULT_USER_AGENT: &str = concat!("linkstash/", env!("CARGO_PKG_VERSION"));

/// Picks a random label from [`GEO_LABELS`].
pub fn random_geo_label() -> &'static str {
    let mut rng = rand::rng();
    GEO_LABELS[rng.random_range(0..GEO_LABELS.len())]
}

/// Synthesizes a click event timestamped now.
///
/// Missing referrer defaults to [`DIRECT_REFERER`]; missing user agent
/// defaults to this tool's own identifier.
pub fn capture_click(referer: Option<String>, user_agent: Option<String>) -> Click {
    Click::new(
        Utc::now(),
        referer.unwrap_or_else(|| DIRECT_REFERER.to_string()),
        user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        random_geo_label().to_string(),
    )
}
