//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; store traits defined here are implemented in
//! [`crate::infrastructure::persistence`] and orchestrated by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
