//! Infrastructure layer for storage integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - JSON file and in-memory store implementations

pub mod persistence;
