use crate::domain::entities::CommunityFeed;
use async_trait::async_trait;
use std::time::Duration;

/// Cache port for settled feed loads, keyed by the composed load's key.
/// Only successful loads are stored; a failed load is retried on the next
/// request.
#[async_trait]
pub trait FeedCache: Send + Sync {
    /// Returns the cached feed if one exists and is still fresh.
    async fn get(&self, key: &str) -> Option<CommunityFeed>;

    /// Stores a settled feed; it goes stale once `ttl` elapses.
    async fn set_with_ttl(&self, key: String, feed: CommunityFeed, ttl: Duration);

    /// Drops a cached feed ahead of its TTL.
    async fn invalidate(&self, key: &str);
}
