//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures of the shortener:
//! plain data, no business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL record with its embedded click history
//! - [`Click`] - A single click event on a shortened link
//!
//! Both entities serialize to the camelCase field names used in the persisted
//! JSON blob.

pub mod click;
pub mod link;

pub use click::Click;
pub use link::Link;
