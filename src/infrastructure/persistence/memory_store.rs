//! In-memory implementation of the link store.

use std::sync::Mutex;

use tracing::warn;

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// A store that keeps the link list in process memory.
///
/// Same semantics as the file-backed store minus persistence. Used in tests
/// and for throwaway sessions where nothing should touch the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    links: Mutex<Vec<Link>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for MemoryStore {
    fn list_all(&self) -> Vec<Link> {
        match self.links.lock() {
            Ok(links) => links.clone(),
            Err(_) => {
                warn!("memory store poisoned, treating as empty");
                Vec::new()
            }
        }
    }

    fn create(&self, link: Link) -> Result<Link, AppError> {
        let mut links = self
            .links
            .lock()
            .map_err(|_| AppError::internal("Memory store poisoned", serde_json::json!({})))?;
        links.push(link.clone());
        Ok(link)
    }

    fn find_by_code(&self, code: &str) -> Option<Link> {
        self.list_all().into_iter().find(|l| l.shortcode == code)
    }

    fn record_click(&self, code: &str, click: Click) -> Result<bool, AppError> {
        let mut links = self
            .links
            .lock()
            .map_err(|_| AppError::internal("Memory store poisoned", serde_json::json!({})))?;

        let Some(link) = links.iter_mut().find(|l| l.shortcode == code) else {
            warn!(shortcode = %code, "link not found for click update");
            return Ok(false);
        };

        link.clicks.push(click);
        Ok(true)
    }

    fn clear_all(&self) -> Result<(), AppError> {
        let mut links = self
            .links
            .lock()
            .map_err(|_| AppError::internal("Memory store poisoned", serde_json::json!({})))?;
        links.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_link(code: &str) -> Link {
        Link::new(
            "https://example.com".to_string(),
            code.to_string(),
            30,
            Utc::now(),
        )
    }

    #[test]
    fn test_create_find_and_clear() {
        let store = MemoryStore::new();

        store.create(sample_link("abc123")).unwrap();
        assert_eq!(store.list_all().len(), 1);
        assert!(store.find_by_code("abc123").is_some());

        store.clear_all().unwrap();
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_record_click_increments_count() {
        let store = MemoryStore::new();
        store.create(sample_link("abc123")).unwrap();

        let click = Click::new(
            Utc::now(),
            "Direct".to_string(),
            "test-agent".to_string(),
            "UK".to_string(),
        );
        assert!(store.record_click("abc123", click).unwrap());
        assert_eq!(store.find_by_code("abc123").unwrap().click_count(), 1);
    }

    #[test]
    fn test_record_click_unknown_code() {
        let store = MemoryStore::new();
        let click = Click::new(
            Utc::now(),
            "Direct".to_string(),
            "test-agent".to_string(),
            "UK".to_string(),
        );
        assert!(!store.record_click("missing", click).unwrap());
    }
}
