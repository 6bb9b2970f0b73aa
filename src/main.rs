use anyhow::Context;
use communa_feed::application::services::CommunityFeedService;
use communa_feed::domain::entities::{Community, Post};
use communa_feed::infrastructure::cache::MemoryFeedCache;
use communa_feed::infrastructure::diagnostics::TracingDiagnostics;
use communa_feed::infrastructure::store::InMemoryCommunityStore;
use communa_feed::presentation::dto::CommunityFeedRequest;
use communa_feed::presentation::handlers::FeedHandler;
use communa_feed::presentation::view::DefaultPostItemPresenter;
use communa_feed::shared::{logging, AppConfig};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("communa-feed");

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let community_id = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .context("community id must be an integer")?,
        None => config.display.default_community_id,
    };

    let store = Arc::new(InMemoryCommunityStore::new());
    seed(&store).await;

    let service = Arc::new(
        CommunityFeedService::new(
            store,
            Arc::new(MemoryFeedCache::new()),
            Arc::new(TracingDiagnostics),
        )
        .with_stale_after(Duration::from_secs(config.cache.stale_after_secs)),
    );
    let handler = FeedHandler::new(service, Arc::new(DefaultPostItemPresenter));

    let view = handler
        .load_feed(CommunityFeedRequest { community_id })
        .await?;
    print!("{}", view.render_text());

    Ok(())
}

async fn seed(store: &InMemoryCommunityStore) {
    store
        .insert_community(Community::new(
            1,
            "Rustaceans".to_string(),
            "Systems programming talk".to_string(),
        ))
        .await;
    store
        .insert_community(Community::new(
            2,
            "Quiet Corner".to_string(),
            "A community with no posts yet".to_string(),
        ))
        .await;

    store
        .insert_post(Post::new(
            10,
            "Borrow checker appreciation thread".to_string(),
            "It caught another use-after-free today.".to_string(),
            "mara".to_string(),
            1,
        ))
        .await;
    store
        .insert_post(Post::new(
            11,
            "Async without fear".to_string(),
            "Notes from porting our worker pool.".to_string(),
            "niko".to_string(),
            1,
        ))
        .await;
}
