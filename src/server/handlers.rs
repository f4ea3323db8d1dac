use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::engine::EngineStats;
use crate::toc::WorksMap;

use super::router::AppState;

/// Body returned when `q` is absent or empty
pub const MISSING_QUERY: &str = "missing search query in URL params";

/// Error wrapper for API handlers
#[derive(Debug)]
pub enum ApiError {
    MissingQuery,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "search failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "search failure").into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Run a substring search and return the context snippets as a JSON array
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let query = match params.q {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::MissingQuery),
    };

    // Lookups are CPU-bound; keep them off the async workers
    let engine = Arc::clone(&state.engine);
    let limit = state.result_limit;
    let results = tokio::task::spawn_blocking(move || engine.search_limited(&query, limit))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(results))
}

/// Titles parsed from the table of contents
pub async fn works(State(state): State<Arc<AppState>>) -> Json<WorksMap> {
    Json(state.engine.works().clone())
}

/// Load statistics
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<EngineStats> {
    Json(state.engine.stats())
}

pub async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchEngine;
    use crate::index::Corpus;
    use std::io::Cursor;

    fn state(limit: Option<usize>) -> Arc<AppState> {
        let engine = SearchEngine::from_parts(
            Corpus::from_bytes(b"to be or not to be".to_vec()),
            Cursor::new("Contents\nHAMLET\nHAMLET\n"),
            250,
        )
        .unwrap();
        Arc::new(AppState {
            engine: Arc::new(engine),
            result_limit: limit,
        })
    }

    #[tokio::test]
    async fn test_search_returns_snippets() {
        let params = SearchParams {
            q: Some("be".to_string()),
        };
        let Json(results) = search(State(state(None)), Query(params)).await.unwrap();
        assert_eq!(results, vec!["to be or not to be"; 2]);
    }

    #[tokio::test]
    async fn test_search_respects_limit() {
        let params = SearchParams {
            q: Some("o".to_string()),
        };
        let Json(results) = search(State(state(Some(1))), Query(params)).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_query_is_bad_request() {
        let err = search(State(state(None)), Query(SearchParams { q: None }))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = search(
            State(state(None)),
            Query(SearchParams {
                q: Some(String::new()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingQuery));
    }

    #[tokio::test]
    async fn test_works_endpoint() {
        let Json(works) = works(State(state(None))).await;
        assert!(works.contains("HAMLET"));
        assert_eq!(works.len(), 1);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let Json(stats) = stats(State(state(None))).await;
        assert_eq!(stats.corpus_bytes, 18);
        assert_eq!(stats.suffix_count, 18);
        assert_eq!(stats.title_count, 1);
        assert_eq!(stats.window, 250);
    }
}
