//! Store trait for link record data access.

use crate::domain::entities::{Click, Link};
use crate::error::AppError;

/// Store interface for the serialized link list.
///
/// All operations are synchronous reads or read-modify-write cycles over one
/// serialized blob. There is no locking: concurrent writers can lose updates
/// (last writer wins on the full-list overwrite), which is acceptable for a
/// single-user local tool.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON file blob
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Returns all stored records.
    ///
    /// Absent or corrupt storage yields an empty list; read failures are
    /// logged, never surfaced.
    fn list_all(&self) -> Vec<Link>;

    /// Appends a record and re-serializes the entire list.
    ///
    /// No uniqueness check is performed here; callers must pre-check the
    /// shortcode against the current list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the list cannot be written back.
    fn create(&self, link: Link) -> Result<Link, AppError>;

    /// Finds a record by its shortcode via linear scan, first match wins.
    fn find_by_code(&self, code: &str) -> Option<Link>;

    /// Appends a click event to the matching record and rewrites the list.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the click was recorded
    /// - `Ok(false)` if no record matches `code` (reported no-op)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the list cannot be written back.
    fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError>;

    /// Deletes the stored list entirely.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the blob exists but cannot be removed.
    fn clear_all(&self) -> Result<(), AppError>;
}
