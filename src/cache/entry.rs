//! Cache Entry Module
//!
//! Defines the structure for payloads held by the in-process store.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;

// == Cache Entry ==
/// A stored payload with its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// TTL the entry was written with, None = no expiration
    pub ttl_secs: Option<u64>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// A TTL of zero means the entry never expires.
    pub fn new(value: Bytes, ttl_secs: u64) -> Self {
        let now = current_timestamp_ms();
        let ttl_secs = (ttl_secs > 0).then_some(ttl_secs);
        let expires_at = ttl_secs.map(|ttl| now.saturating_add(ttl.saturating_mul(1000)));

        Self {
            value,
            ttl_secs,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
