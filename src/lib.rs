//! # linkstash
//!
//! A local-first URL shortener: submit long URLs, get short codes, inspect
//! click statistics. All state lives in one JSON blob on disk; there is no
//! server, no network protocol, and no concurrency.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the store trait
//! - **Application Layer** ([`application`]) - Business logic services
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and in-memory stores
//!
//! ## Features
//!
//! - Random 6-character alphanumeric shortcodes with collision retry
//! - Optional custom shortcodes (3-10 alphanumeric characters)
//! - Per-link validity periods with expiry enforcement on resolve
//! - Click tracking with referrer, user agent, and coarse geo labels
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use linkstash::prelude::*;
//! use linkstash::application::dto::ShortenRequest;
//! use linkstash::infrastructure::persistence::MemoryStore;
//!
//! let store = Arc::new(MemoryStore::new());
//! let links = LinkService::new(store.clone());
//! let redirects = RedirectService::new(store.clone());
//!
//! let link = links.shorten(ShortenRequest::new("https://example.com")).unwrap();
//! let redirect = redirects.resolve(&link.shortcode, None, None).unwrap();
//! assert_eq!(redirect.location, "https://example.com");
//! ```
//!
//! ## Configuration
//!
//! The CLI loads settings from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkService, LinkStats, Redirect, RedirectService, StatsService,
    };
    pub use crate::domain::entities::{Click, Link};
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::AppError;
}
