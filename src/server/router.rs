use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::engine::SearchEngine;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    /// Cap on snippets per query
    pub result_limit: Option<usize>,
}

/// Create the HTTP router with all endpoints
///
/// Paths that match no endpoint are served from `static_dir`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/search", get(search))
        .route("/works", get(works))
        .route("/stats", get(stats))
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
