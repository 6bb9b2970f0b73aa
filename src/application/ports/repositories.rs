use crate::domain::entities::{Community, PostWithCommunity};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Read port over the remote community store. Implementations own the
/// query syntax; only the filter contract is fixed here.
#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Exact-match, single-row community read. Zero rows is an error,
    /// matching the remote store's single-row contract.
    async fn find_community(&self, id: i64) -> Result<Community, AppError>;

    /// Posts filtered by community id, each row carrying the embedded
    /// community-name projection. Zero rows yields an empty vector.
    async fn posts_for_community(
        &self,
        community_id: i64,
    ) -> Result<Vec<PostWithCommunity>, AppError>;
}
