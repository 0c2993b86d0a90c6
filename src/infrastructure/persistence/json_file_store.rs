//! JSON file implementation of the link store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// File-backed store holding all link records in one JSON blob.
///
/// Every operation re-reads and re-parses the file, mirroring the single
/// storage slot the tool persists into. Writes serialize the full list and
/// overwrite the file in place; there is no file locking.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created lazily on first write; a missing file reads as an
    /// empty list.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(path = %path.display(), "using JSON file store");
        Self { path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the full record list.
    ///
    /// A missing file is an empty list. Unreadable or malformed content is
    /// logged and swallowed as empty rather than surfaced.
    fn read_links(&self) -> Vec<Link> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read link storage, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(links) => links,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed link storage, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serializes the full record list and overwrites the file.
    fn write_links(&self, links: &[Link]) -> Result<(), AppError> {
        let raw = serde_json::to_string(links).map_err(|e| {
            AppError::internal(
                "Failed to serialize link storage",
                json!({ "reason": e.to_string() }),
            )
        })?;

        fs::write(&self.path, raw).map_err(|e| {
            AppError::internal(
                "Failed to write link storage",
                json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        debug!(count = links.len(), "link storage saved");
        Ok(())
    }
}

impl LinkStore for JsonFileStore {
    fn list_all(&self) -> Vec<Link> {
        self.read_links()
    }

    fn create(&self, link: Link) -> Result<Link, AppError> {
        let mut links = self.read_links();
        links.push(link.clone());
        self.write_links(&links)?;
        debug!(shortcode = %link.shortcode, "link record added");
        Ok(link)
    }

    fn find_by_code(&self, code: &str) -> Option<Link> {
        self.read_links().into_iter().find(|l| l.shortcode == code)
    }

    fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError> {
        let mut links = self.read_links();

        let Some(link) = links.iter_mut().find(|l| l.shortcode == code) else {
            warn!(shortcode = %code, "link not found for click update");
            return Ok(false);
        };

        link.clicks.push(click);
        let count = link.clicks.len();
        self.write_links(&links)?;
        debug!(shortcode = %code, click_count = count, "click recorded");
        Ok(true)
    }

    fn clear_all(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "link storage cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::internal(
                "Failed to clear link storage",
                json!({ "path": self.path.display().to_string(), "reason": e.to_string() }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("links.json"))
    }

    fn sample_link(code: &str) -> Link {
        Link::new(
            "https://example.com".to_string(),
            code.to_string(),
            30,
            Utc::now(),
        )
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_create_then_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.create(sample_link("abc123")).unwrap();
        store.create(sample_link("xyz789")).unwrap();

        let links = store.list_all();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].shortcode, "abc123");
        assert_eq!(links[1].shortcode, "xyz789");
    }

    #[test]
    fn test_find_by_code() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.create(sample_link("abc123")).unwrap();

        let found = store.find_by_code("abc123");
        assert!(found.is_some());
        assert_eq!(found.unwrap().shortcode, "abc123");
        assert!(store.find_by_code("missing").is_none());
    }

    #[test]
    fn test_record_click_appends_to_matching_record_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.create(sample_link("abc123")).unwrap();
        store.create(sample_link("xyz789")).unwrap();

        let click = Click::new(
            Utc::now(),
            "Direct".to_string(),
            "test-agent".to_string(),
            "USA".to_string(),
        );
        let recorded = store.record_click("abc123", click).unwrap();
        assert!(recorded);

        assert_eq!(store.find_by_code("abc123").unwrap().click_count(), 1);
        assert_eq!(store.find_by_code("xyz789").unwrap().click_count(), 0);
    }

    #[test]
    fn test_record_click_for_unknown_code_is_reported_noop() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let click = Click::new(
            Utc::now(),
            "Direct".to_string(),
            "test-agent".to_string(),
            "USA".to_string(),
        );
        let recorded = store.record_click("missing", click).unwrap();
        assert!(!recorded);
    }

    #[test]
    fn test_clear_all_empties_storage() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.create(sample_link("abc123")).unwrap();
        store.clear_all().unwrap();

        assert!(store.list_all().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_all_on_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.clear_all().is_ok());
    }

    #[test]
    fn test_stored_blob_is_a_json_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.create(sample_link("abc123")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["shortcode"], "abc123");
    }
}
