//! Fetch Cache - A cache-aside HTTP fetch proxy
//!
//! Returns the body of a target URL, caching fetched bytes in a key-value
//! store keyed by the SHA-1 of the URL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::ProxyError;
pub use fetch::CacheAsideFetcher;
pub use tasks::spawn_cleanup_task;
