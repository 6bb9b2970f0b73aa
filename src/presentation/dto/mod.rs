pub mod feed_dto;

pub use feed_dto::{CommunityFeedRequest, PostItemDto};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
