use crate::domain::entities::{Community, CommunityFeed, PostWithCommunity};
use crate::presentation::dto::PostItemDto;
use crate::shared::error::AppError;
use std::fmt::Write as _;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "Error loading data";
pub const EMPTY_FEED_MESSAGE: &str = "No posts in this community yet.";

/// Reactive state of the composed cached load, mirroring the
/// `{ data, isLoading, error }` triple the cache scheduler exposes.
#[derive(Debug, Clone)]
pub struct FeedQueryState {
    pub data: Option<CommunityFeed>,
    pub is_loading: bool,
    pub error: Option<AppError>,
}

impl FeedQueryState {
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn settled(feed: CommunityFeed) -> Self {
        Self {
            data: Some(feed),
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(error: AppError) -> Self {
        Self {
            data: None,
            is_loading: false,
            error: Some(error),
        }
    }

    pub fn from_result(result: Result<CommunityFeed, AppError>) -> Self {
        match result {
            Ok(feed) => Self::settled(feed),
            Err(error) => Self::failed(error),
        }
    }
}

/// Presentational collaborator: invoked once per post, stable key = post id.
pub trait PostItemPresenter: Send + Sync {
    fn present(&self, post: &PostWithCommunity) -> PostItemDto;
}

pub struct DefaultPostItemPresenter;

impl PostItemPresenter for DefaultPostItemPresenter {
    fn present(&self, post: &PostWithCommunity) -> PostItemDto {
        PostItemDto {
            key: post.id(),
            title: post.post.title.clone(),
            content: post.post.content.clone(),
            author: post.post.author.clone(),
            community_name: post.communities.name.clone(),
            created_at: post.post.created_at.timestamp(),
        }
    }
}

/// What the user sees for a given query state.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    Loading,
    Error,
    Feed {
        heading: String,
        items: Vec<PostItemDto>,
        empty_message: Option<String>,
    },
}

impl FeedView {
    pub fn render_text(&self) -> String {
        match self {
            FeedView::Loading => LOADING_MESSAGE.to_string(),
            FeedView::Error => ERROR_MESSAGE.to_string(),
            FeedView::Feed {
                heading,
                items,
                empty_message,
            } => {
                let mut out = String::new();
                let _ = writeln!(out, "{heading}");
                match empty_message {
                    Some(message) => {
                        let _ = writeln!(out, "{message}");
                    }
                    None => {
                        for item in items {
                            let _ = writeln!(
                                out,
                                "[{}] {} by {} ({})",
                                item.key, item.title, item.author, item.community_name
                            );
                        }
                    }
                }
                out
            }
        }
    }
}

pub fn feed_heading(community: Option<&Community>, community_id: i64) -> String {
    match community {
        Some(community) => format!("{} Posts", community.name),
        None => format!("Community {community_id} Posts"),
    }
}

/// Pure view derivation: loading wins over everything, then error, then the
/// settled pair. Absent data on a settled state renders like an empty feed.
pub fn present_feed(
    state: &FeedQueryState,
    community_id: i64,
    presenter: &dyn PostItemPresenter,
) -> FeedView {
    if state.is_loading {
        return FeedView::Loading;
    }
    if state.error.is_some() {
        return FeedView::Error;
    }

    let (community, posts) = match &state.data {
        Some(feed) => (feed.community.as_ref(), feed.posts.as_slice()),
        None => (None, &[][..]),
    };

    let heading = feed_heading(community, community_id);
    let items: Vec<PostItemDto> = posts.iter().map(|post| presenter.present(post)).collect();
    let empty_message = if items.is_empty() {
        Some(EMPTY_FEED_MESSAGE.to_string())
    } else {
        None
    };

    FeedView::Feed {
        heading,
        items,
        empty_message,
    }
}
