#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use linkstash::application::dto::ShortenRequest;
use linkstash::domain::entities::Link;
use linkstash::domain::repositories::LinkStore;
use linkstash::infrastructure::persistence::JsonFileStore;
use tempfile::TempDir;

/// Creates a file store in a scratch directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn create_test_store() -> (TempDir, Arc<JsonFileStore>) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("links.json")));
    (dir, store)
}

pub fn shorten_request(url: &str) -> ShortenRequest {
    ShortenRequest {
        url: url.to_string(),
        validity_minutes: 30,
        custom_code: None,
    }
}

/// Inserts a link with an explicit creation time, bypassing the service.
///
/// Used to seed already-expired records.
pub fn insert_link_created_at(
    store: &JsonFileStore,
    code: &str,
    url: &str,
    validity_minutes: u32,
    created_at: DateTime<Utc>,
) -> Link {
    let link = Link::new(url.to_string(), code.to_string(), validity_minutes, created_at);
    store.create(link).unwrap()
}
