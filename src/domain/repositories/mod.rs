//! Store trait definitions for the domain layer.
//!
//! The store trait abstracts access to the single serialized link list,
//! following the Repository pattern: the trait defines the contract here,
//! concrete implementations live in `crate::infrastructure::persistence`,
//! and mock implementations are auto-generated via `mockall` for testing.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
