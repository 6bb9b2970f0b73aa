use crate::application::ports::cache::FeedCache;
use crate::domain::entities::CommunityFeed;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Clone)]
struct CacheEntry {
    feed: CommunityFeed,
    expires_at: Instant,
}

/// In-memory TTL cache for settled feed loads. Expired entries stay in the
/// map until a `cleanup_expired` pass; `get` never returns them.
pub struct MemoryFeedCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryFeedCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn cleanup_expired(&self) {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    pub async fn size(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }
}

impl Default for MemoryFeedCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedCache for MemoryFeedCache {
    async fn get(&self, key: &str) -> Option<CommunityFeed> {
        let entries = self.entries.read().await;

        if let Some(entry) = entries.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.feed.clone());
            }
        }

        None
    }

    async fn set_with_ttl(&self, key: String, feed: CommunityFeed, ttl: Duration) {
        let entry = CacheEntry {
            feed,
            expires_at: Instant::now() + ttl,
        };

        let mut entries = self.entries.write().await;
        entries.insert(key, entry);
    }

    async fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> CommunityFeed {
        CommunityFeed::new(None, Vec::new())
    }

    #[tokio::test]
    async fn fresh_entries_are_returned() {
        let cache = MemoryFeedCache::new();
        cache
            .set_with_ttl("communityData:1".to_string(), feed(), Duration::from_secs(60))
            .await;

        assert!(cache.get("communityData:1").await.is_some());
        assert!(cache.get("communityData:2").await.is_none());
    }

    #[tokio::test]
    async fn expired_entries_are_not_returned() {
        let cache = MemoryFeedCache::new();
        cache
            .set_with_ttl(
                "communityData:1".to_string(),
                feed(),
                Duration::from_millis(5),
            )
            .await;

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(cache.get("communityData:1").await.is_none());
    }

    #[tokio::test]
    async fn invalidate_removes_the_entry() {
        let cache = MemoryFeedCache::new();
        cache
            .set_with_ttl("communityData:1".to_string(), feed(), Duration::from_secs(60))
            .await;

        cache.invalidate("communityData:1").await;
        assert!(cache.get("communityData:1").await.is_none());
    }

    #[tokio::test]
    async fn cleanup_drops_only_expired_entries() {
        let cache = MemoryFeedCache::new();
        cache
            .set_with_ttl("stale".to_string(), feed(), Duration::from_millis(5))
            .await;
        cache
            .set_with_ttl("fresh".to_string(), feed(), Duration::from_secs(60))
            .await;

        tokio::time::sleep(Duration::from_millis(20)).await;
        cache.cleanup_expired().await;

        assert_eq!(cache.size().await, 1);
        assert!(cache.get("fresh").await.is_some());
    }
}
