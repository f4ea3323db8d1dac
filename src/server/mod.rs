//! HTTP front end
//!
//! A thin layer over a loaded [`SearchEngine`]: it validates the query,
//! runs the search and encodes the snippets as JSON. The engine must be fully
//! loaded before [`serve`] is called; nothing here loads or rebuilds it.
//!
//! Endpoints:
//! - `GET /search?q=<query>` - JSON array of context snippets
//! - `GET /works` - JSON object of title → entries
//! - `GET /stats` - load statistics
//! - `GET /health` - liveness probe
//! - anything else - static files

mod handlers;
mod router;

pub use handlers::{ApiError, MISSING_QUERY};
pub use router::{create_router, AppState};

use crate::engine::SearchEngine;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Listener settings
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub port: u16,
    pub static_dir: PathBuf,
    pub result_limit: Option<usize>,
}

/// Serve `engine` over HTTP until the process is stopped
pub async fn serve(engine: Arc<SearchEngine>, options: ServeOptions) -> Result<()> {
    let state = AppState {
        engine,
        result_limit: options.result_limit,
    };
    let app = create_router(state, &options.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], options.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!(%addr, static_dir = %options.static_dir.display(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}
