use super::community::Community;
use super::post::PostWithCommunity;
use serde::{Deserialize, Serialize};

/// Read model produced by one composed feed load. Both halves always come
/// from the same load for one community id; the community may be absent
/// when its lookup was soft-failed, the posts are then still valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityFeed {
    pub community: Option<Community>,
    pub posts: Vec<PostWithCommunity>,
}

impl CommunityFeed {
    pub fn new(community: Option<Community>, posts: Vec<PostWithCommunity>) -> Self {
        Self { community, posts }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
