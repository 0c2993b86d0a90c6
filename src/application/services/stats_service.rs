//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// A link together with its total click count.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub total_clicks: usize,
}

impl From<Link> for LinkStats {
    fn from(link: Link) -> Self {
        let total_clicks = link.click_count();
        Self { link, total_clicks }
    }
}

/// Service for inspecting click statistics.
///
/// Clicks are embedded in each link record, so statistics reduce to reading
/// the current list; there is no separate analytics store.
pub struct StatsService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> StatsService<S> {
    /// Creates a new statistics service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Retrieves statistics for a specific shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub fn stats_for(&self, code: &str) -> Result<LinkStats, AppError> {
        self.store
            .find_by_code(code)
            .map(LinkStats::from)
            .ok_or_else(|| {
                AppError::not_found("Statistics not found", json!({ "code": code }))
            })
    }

    /// Retrieves statistics for every stored link, in insertion order.
    pub fn all_stats(&self) -> Vec<LinkStats> {
        self.store
            .list_all()
            .into_iter()
            .map(LinkStats::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockLinkStore;
    use chrono::Utc;

    fn link_with_clicks(code: &str, clicks: usize) -> Link {
        let mut link = Link::new(
            "https://example.com".to_string(),
            code.to_string(),
            30,
            Utc::now(),
        );
        for _ in 0..clicks {
            link.clicks.push(Click::new(
                Utc::now(),
                "Direct".to_string(),
                "test-agent".to_string(),
                "France".to_string(),
            ));
        }
        link
    }

    #[test]
    fn test_stats_for_counts_clicks() {
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Some(link_with_clicks(code, 5)));

        let service = StatsService::new(Arc::new(mock_store));
        let stats = service.stats_for("abc123").unwrap();

        assert_eq!(stats.total_clicks, 5);
        assert_eq!(stats.link.shortcode, "abc123");
        assert_eq!(stats.link.clicks.len(), 5);
    }

    #[test]
    fn test_stats_for_unknown_code() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_find_by_code().returning(|_| None);

        let service = StatsService::new(Arc::new(mock_store));
        let result = service.stats_for("missing");

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_all_stats_preserves_order() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_list_all().times(1).returning(|| {
            vec![link_with_clicks("abc123", 2), link_with_clicks("xyz789", 0)]
        });

        let service = StatsService::new(Arc::new(mock_store));
        let stats = service.all_stats();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].link.shortcode, "abc123");
        assert_eq!(stats[0].total_clicks, 2);
        assert_eq!(stats[1].link.shortcode, "xyz789");
        assert_eq!(stats[1].total_clicks, 0);
    }
}
