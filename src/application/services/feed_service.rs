use crate::application::ports::cache::FeedCache;
use crate::application::ports::diagnostics::{FeedDiagnostic, FeedDiagnostics};
use crate::application::ports::repositories::CommunityRepository;
use crate::domain::entities::{Community, CommunityFeed, PostWithCommunity};
use crate::shared::error::AppError;
use std::sync::Arc;
use std::time::Duration;

/// Settled loads stay fresh for 5 minutes unless configured otherwise.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(300);

pub struct CommunityFeedService {
    repository: Arc<dyn CommunityRepository>,
    cache: Arc<dyn FeedCache>,
    diagnostics: Arc<dyn FeedDiagnostics>,
    stale_after: Duration,
}

impl CommunityFeedService {
    pub fn new(
        repository: Arc<dyn CommunityRepository>,
        cache: Arc<dyn FeedCache>,
        diagnostics: Arc<dyn FeedDiagnostics>,
    ) -> Self {
        Self {
            repository,
            cache,
            diagnostics,
            stale_after: DEFAULT_STALE_AFTER,
        }
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    fn feed_cache_key(community_id: i64) -> String {
        format!("communityData:{community_id}")
    }

    /// Community lookup. A store error is absorbed into `None`: callers only
    /// ever see an absent community, never the failure itself.
    pub async fn fetch_community(&self, id: i64) -> Option<Community> {
        match self.repository.find_community(id).await {
            Ok(community) => {
                self.diagnostics
                    .record(FeedDiagnostic::CommunityFetched { community_id: id });
                Some(community)
            }
            Err(err) => {
                self.diagnostics
                    .record(FeedDiagnostic::CommunityFetchFailed {
                        community_id: id,
                        message: err.to_string(),
                    });
                None
            }
        }
    }

    /// Joined posts lookup. Unlike `fetch_community`, a store error here
    /// propagates and fails the enclosing load.
    pub async fn fetch_community_posts(
        &self,
        id: i64,
    ) -> Result<Vec<PostWithCommunity>, AppError> {
        match self.repository.posts_for_community(id).await {
            Ok(posts) => {
                self.diagnostics.record(FeedDiagnostic::PostsFetched {
                    community_id: id,
                    count: posts.len(),
                });
                Ok(posts)
            }
            Err(err) => {
                self.diagnostics.record(FeedDiagnostic::PostsFetchFailed {
                    community_id: id,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Composed cached load. A fresh cached pair is returned without
    /// touching the store; on a miss both reads go out together and only
    /// their joint completion matters.
    pub async fn load_feed(&self, community_id: i64) -> Result<CommunityFeed, AppError> {
        let key = Self::feed_cache_key(community_id);

        if let Some(feed) = self.cache.get(&key).await {
            return Ok(feed);
        }

        let (community, posts) = tokio::join!(
            self.fetch_community(community_id),
            self.fetch_community_posts(community_id),
        );
        let posts = posts?;

        let feed = CommunityFeed::new(community, posts);
        self.cache
            .set_with_ttl(key, feed.clone(), self.stale_after)
            .await;
        Ok(feed)
    }

    pub async fn invalidate(&self, community_id: i64) {
        self.cache
            .invalidate(&Self::feed_cache_key(community_id))
            .await;
    }
}
