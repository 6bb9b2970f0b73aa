use super::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityFeedRequest {
    pub community_id: i64,
}

impl Validate for CommunityFeedRequest {
    fn validate(&self) -> Result<(), String> {
        if self.community_id <= 0 {
            return Err("community_id must be a positive integer".to_string());
        }
        Ok(())
    }
}

/// One rendered post item; `key` is the stable post id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostItemDto {
    pub key: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub community_name: String,
    pub created_at: i64,
}
