//! API Handlers
//!
//! HTTP request handlers for the fetch proxy endpoints.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::cache::PayloadStore;
use crate::error::Result;
use crate::fetch::{CacheAsideFetcher, HttpOrigin, Origin};
use crate::models::{FetchRequest, HealthResponse};

/// Content type of every successful fetch response.
pub const PAYLOAD_CONTENT_TYPE: &str = "text/plain";

/// Client-side caching directive for every successful fetch response.
///
/// Independent of the TTL used for the store.
pub const PAYLOAD_CACHE_CONTROL: &str = "public, max-age=86400, immutable";

/// Application state shared across all handlers.
///
/// Built once at startup; handlers receive typed handles through axum's
/// `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside fetcher
    pub fetcher: CacheAsideFetcher,
    /// The fetcher's store, kept for health checks
    pub store: Arc<dyn PayloadStore>,
}

impl AppState {
    /// Creates a new AppState from a store and an origin.
    pub fn new(store: Arc<dyn PayloadStore>, origin: Arc<dyn Origin>) -> Self {
        Self {
            fetcher: CacheAsideFetcher::new(store.clone(), origin),
            store,
        }
    }

    /// Creates a new AppState fetching through a default HTTP client.
    pub fn with_http_origin(store: Arc<dyn PayloadStore>) -> Self {
        Self::new(store, Arc::new(HttpOrigin::new()))
    }
}

/// Handler for GET /?url=<url>[&interval=<seconds>]
///
/// Returns the URL's body, from the store when cached.
pub async fn fetch_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    let req = FetchRequest::from_query(query.as_deref()).inspect_err(|e| {
        warn!(query = query.as_deref().unwrap_or_default(), error = %e, "Invalid query parameters");
    })?;

    let payload = state.fetcher.fetch(&req).await?;

    Ok((
        [
            (header::CONTENT_TYPE, PAYLOAD_CONTENT_TYPE),
            (header::CACHE_CONTROL, PAYLOAD_CACHE_CONTROL),
        ],
        payload.body,
    )
        .into_response())
}

/// Handler for GET /health
///
/// Always answers 200; `store` reports whether the store answers a ping.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_up = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            false
        }
    };

    Json(HealthResponse::healthy(store_up))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::error::ProxyError;
    use crate::fetch::OriginResponse;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use bytes::Bytes;

    struct FixedOrigin(&'static str);

    #[async_trait]
    impl Origin for FixedOrigin {
        async fn get(&self, _url: &str) -> Result<OriginResponse> {
            Ok(OriginResponse {
                status: StatusCode::OK,
                body: Bytes::from_static(self.0.as_bytes()),
            })
        }
    }

    fn test_state(body: &'static str) -> AppState {
        AppState::new(Arc::new(MemoryStore::new()), Arc::new(FixedOrigin(body)))
    }

    #[tokio::test]
    async fn test_fetch_handler_sets_headers() {
        let state = test_state("hello");

        let response = fetch_handler(
            State(state),
            RawQuery(Some("url=https://example.com/".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PAYLOAD_CONTENT_TYPE
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            PAYLOAD_CACHE_CONTROL
        );
    }

    #[tokio::test]
    async fn test_fetch_handler_without_query() {
        let state = test_state("hello");

        let result = fetch_handler(State(state), RawQuery(None)).await;
        assert!(matches!(result, Err(ProxyError::Validation(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(test_state("hello"))).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.store, "up");
    }
}
