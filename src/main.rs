//! Fetch Cache - A cache-aside HTTP fetch proxy
//!
//! Serves `GET /?url=<url>&interval=<seconds>`, caching origin bodies in Redis.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fetch_cache::api::create_router;
use fetch_cache::cache::{MemoryStore, PayloadStore, RedisStore};
use fetch_cache::config::{Config, StoreBackend};
use fetch_cache::{spawn_cleanup_task, AppState};

/// Main entry point for the fetch proxy.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to the store (a failed PING aborts startup)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fetch cache proxy");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cleanup_interval={}s",
        config.server_port, config.cleanup_interval
    );

    let (store, cleanup_handle): (Arc<dyn PayloadStore>, Option<JoinHandle<()>>) =
        match config.store_backend() {
            StoreBackend::Redis(url) => {
                let store = RedisStore::connect(&url)
                    .await
                    .context("failed to connect to the Redis store")?;
                info!("Redis store connected");
                (Arc::new(store) as Arc<dyn PayloadStore>, None)
            }
            StoreBackend::Memory => {
                let store = Arc::new(MemoryStore::new());
                let handle = spawn_cleanup_task(store.clone(), config.cleanup_interval);
                info!("In-process store initialized");
                (store as Arc<dyn PayloadStore>, Some(handle))
            }
        };

    let app = create_router(AppState::with_http_origin(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
