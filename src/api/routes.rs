//! API Routes
//!
//! Configures the Axum router with all fetch proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{fetch_handler, health_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /?url=<url>&interval=<seconds>` - Fetch a URL through the cache
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Tracing: Logs all requests
/// - Catch panic: Turns handler panics into 500 responses
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(fetch_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryStore, PayloadStore};
    use crate::error::PROBLEM_JSON;
    use crate::fetch::HttpOrigin;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app(store: Arc<MemoryStore>) -> Router {
        let state = AppState::new(store, Arc::new(HttpOrigin::new()));
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app(Arc::new(MemoryStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let app = create_test_app(Arc::new(MemoryStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?interval=60")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PROBLEM_JSON
        );
    }

    #[tokio::test]
    async fn test_cached_url_is_served() {
        let store = Arc::new(MemoryStore::new());
        store
            .set("dfa8ce7471028ee0addb32f80fa8ecdcd7e112cf:data", b"1.1.1.1", 3600)
            .await
            .unwrap();
        let app = create_test_app(store);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?url=https://1.1.1.1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"1.1.1.1");
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let app = create_test_app(Arc::new(MemoryStore::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/get/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
