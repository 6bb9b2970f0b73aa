use crate::application::ports::repositories::CommunityRepository;
use crate::domain::entities::{Community, Post, PostWithCommunity};
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process stand-in for the remote community store. Preserves the remote
/// query contract: the community read is single-row (zero rows is an error)
/// and the posts read embeds the parent community's name, filtered by the
/// foreign key.
pub struct InMemoryCommunityStore {
    communities: RwLock<HashMap<i64, Community>>,
    posts: RwLock<Vec<Post>>,
}

impl InMemoryCommunityStore {
    pub fn new() -> Self {
        Self {
            communities: RwLock::new(HashMap::new()),
            posts: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert_community(&self, community: Community) {
        let mut communities = self.communities.write().await;
        communities.insert(community.id, community);
    }

    pub async fn insert_post(&self, post: Post) {
        let mut posts = self.posts.write().await;
        posts.push(post);
    }
}

impl Default for InMemoryCommunityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommunityRepository for InMemoryCommunityStore {
    async fn find_community(&self, id: i64) -> Result<Community, AppError> {
        let communities = self.communities.read().await;
        communities
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("community {id}")))
    }

    async fn posts_for_community(
        &self,
        community_id: i64,
    ) -> Result<Vec<PostWithCommunity>, AppError> {
        let communities = self.communities.read().await;
        // Posts reference their community by foreign key, so an unknown
        // community joins to zero rows.
        let Some(name) = communities.get(&community_id).map(|c| c.name.clone()) else {
            return Ok(Vec::new());
        };

        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| post.community_id == community_id)
            .map(|post| PostWithCommunity::new(post.clone(), name.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_store() -> InMemoryCommunityStore {
        let store = InMemoryCommunityStore::new();
        store
            .insert_community(Community::new(
                1,
                "Cats".to_string(),
                "All about cats".to_string(),
            ))
            .await;
        store
            .insert_post(Post::new(
                10,
                "First".to_string(),
                "content".to_string(),
                "mara".to_string(),
                1,
            ))
            .await;
        store
            .insert_post(Post::new(
                11,
                "Elsewhere".to_string(),
                "content".to_string(),
                "niko".to_string(),
                2,
            ))
            .await;
        store
    }

    #[tokio::test]
    async fn single_row_read_errors_on_zero_rows() {
        let store = seeded_store().await;
        let result = store.find_community(99).await;
        assert_eq!(result, Err(AppError::NotFound("community 99".to_string())));
    }

    #[tokio::test]
    async fn joined_read_embeds_the_community_name() {
        let store = seeded_store().await;
        let posts = store.posts_for_community(1).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id(), 10);
        assert_eq!(posts[0].community_name(), "Cats");
    }

    #[tokio::test]
    async fn joined_read_on_unknown_community_is_empty() {
        let store = seeded_store().await;
        let posts = store.posts_for_community(99).await.unwrap();
        assert!(posts.is_empty());
    }
}
