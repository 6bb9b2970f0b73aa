pub mod community;
pub mod feed;
pub mod post;

pub use community::{Community, CommunityRef};
pub use feed::CommunityFeed;
pub use post::{Post, PostWithCommunity};
