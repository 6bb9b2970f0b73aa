/// Diagnostic event emitted for every accessor completion, success or
/// failure. Diagnostic-only; nothing here reaches the rendered view.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedDiagnostic {
    CommunityFetched { community_id: i64 },
    CommunityFetchFailed { community_id: i64, message: String },
    PostsFetched { community_id: i64, count: usize },
    PostsFetchFailed { community_id: i64, message: String },
}

/// Sink port for feed diagnostics.
pub trait FeedDiagnostics: Send + Sync {
    fn record(&self, event: FeedDiagnostic);
}
