//! Concrete link store implementations.
//!
//! Implements the domain's [`crate::domain::repositories::LinkStore`] trait:
//!
//! - [`JsonFileStore`] - one JSON file blob, read-modify-write on every call
//! - [`MemoryStore`] - in-process list for tests and throwaway sessions

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
