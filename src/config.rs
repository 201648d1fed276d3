//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Store URL scheme selecting the in-process backend.
pub const MEMORY_SCHEME: &str = "memory://";

/// Which key-value store backs the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Redis at the given connection URL
    Redis(String),
    /// In-process HashMap store
    Memory,
}

impl StoreBackend {
    /// Classifies a store connection URL.
    pub fn from_url(url: &str) -> Self {
        if url.starts_with(MEMORY_SCHEME) {
            StoreBackend::Memory
        } else {
            StoreBackend::Redis(url.to_string())
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key-value store connection URL
    pub store_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Expired-entry sweep interval in seconds (in-process store only)
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Store connection URL (default: redis://127.0.0.1:6379)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            store_url: env::var("REDIS_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.store_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Returns the backend selected by `store_url`.
    pub fn store_backend(&self) -> StoreBackend {
        StoreBackend::from_url(&self.store_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: "redis://127.0.0.1:6379".to_string(),
            server_port: 8080,
            cleanup_interval: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.store_url, "redis://127.0.0.1:6379");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cleanup_interval, 1);
    }

    #[test]
    fn test_store_backend_from_url() {
        assert_eq!(StoreBackend::from_url("memory://"), StoreBackend::Memory);
        assert_eq!(
            StoreBackend::from_url("redis://cache:6379/2"),
            StoreBackend::Redis("redis://cache:6379/2".to_string())
        );
        assert_eq!(
            StoreBackend::from_url("rediss://user:pw@cache:6380"),
            StoreBackend::Redis("rediss://user:pw@cache:6380".to_string())
        );
    }

    #[test]
    fn test_default_backend_is_redis() {
        assert!(matches!(
            Config::default().store_backend(),
            StoreBackend::Redis(_)
        ));
    }
}
