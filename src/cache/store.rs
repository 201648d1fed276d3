//! Payload Store Module
//!
//! The get/set-with-TTL contract the fetcher relies on. Persistence,
//! replication and eviction belong to the backend.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors reported by a store backend.
///
/// The fetcher never surfaces these to clients; reads degrade to a miss and
/// writes are dropped.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Type alias for store results.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A key-value store holding cached payloads.
#[async_trait]
pub trait PayloadStore: Send + Sync + 'static {
    /// Reads the payload under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent or expired.
    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>>;

    /// Writes `value` under `key`, expiring after `ttl_secs` seconds.
    ///
    /// A TTL of zero stores the value without expiry.
    async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> StoreResult<()>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
