use crate::application::services::CommunityFeedService;
use crate::presentation::dto::{CommunityFeedRequest, Validate};
use crate::presentation::view::{present_feed, FeedQueryState, FeedView, PostItemPresenter};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct FeedHandler {
    feed_service: Arc<CommunityFeedService>,
    presenter: Arc<dyn PostItemPresenter>,
}

impl FeedHandler {
    pub fn new(feed_service: Arc<CommunityFeedService>, presenter: Arc<dyn PostItemPresenter>) -> Self {
        Self {
            feed_service,
            presenter,
        }
    }

    /// Runs the composed load and folds the outcome into a view. A hard
    /// load failure becomes the generic error view; only an invalid
    /// request surfaces as an error to the caller.
    pub async fn load_feed(&self, request: CommunityFeedRequest) -> Result<FeedView, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let state =
            FeedQueryState::from_result(self.feed_service.load_feed(request.community_id).await);
        Ok(present_feed(
            &state,
            request.community_id,
            self.presenter.as_ref(),
        ))
    }
}
