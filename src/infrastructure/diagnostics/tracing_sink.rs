use crate::application::ports::diagnostics::{FeedDiagnostic, FeedDiagnostics};
use tracing::{debug, error};

/// Production sink: forwards feed diagnostics to the tracing subscriber.
pub struct TracingDiagnostics;

impl FeedDiagnostics for TracingDiagnostics {
    fn record(&self, event: FeedDiagnostic) {
        match event {
            FeedDiagnostic::CommunityFetched { community_id } => {
                debug!(community_id, "community fetched");
            }
            FeedDiagnostic::CommunityFetchFailed {
                community_id,
                message,
            } => {
                error!(community_id, %message, "community fetch failed");
            }
            FeedDiagnostic::PostsFetched {
                community_id,
                count,
            } => {
                debug!(community_id, count, "community posts fetched");
            }
            FeedDiagnostic::PostsFetchFailed {
                community_id,
                message,
            } => {
                error!(community_id, %message, "community posts fetch failed");
            }
        }
    }
}
