use super::community::CommunityRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub community_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(id: i64, title: String, content: String, author: String, community_id: i64) -> Self {
        Self {
            id,
            title,
            content,
            author,
            community_id,
            created_at: Utc::now(),
        }
    }
}

/// A post row extended with the embedded community projection, exactly the
/// shape the joined read returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostWithCommunity {
    #[serde(flatten)]
    pub post: Post,
    pub communities: CommunityRef,
}

impl PostWithCommunity {
    pub fn new(post: Post, community_name: String) -> Self {
        Self {
            post,
            communities: CommunityRef {
                name: community_name,
            },
        }
    }

    pub fn id(&self) -> i64 {
        self.post.id
    }

    pub fn community_name(&self) -> &str {
        &self.communities.name
    }
}
