//! In-Process Store Module
//!
//! A [`PayloadStore`] backed by a HashMap, for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::trace;

use crate::cache::store::{PayloadStore, StoreResult};
use crate::cache::CacheEntry;

// == Memory Store ==
/// In-process payload storage with TTL expiration.
///
/// Expired entries read as absent and are dropped on access; a background
/// sweep (see [`crate::tasks::spawn_cleanup_task`]) removes the rest.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    /// Returns the TTL `key` was last written with.
    ///
    /// `Some(None)` means the entry exists without expiry.
    pub async fn ttl_secs(&self, key: &str) -> Option<Option<u64>> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.ttl_secs)
    }

    /// Returns the current number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PayloadStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Bytes>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired: drop it unless a concurrent write already replaced it.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(CacheEntry::is_expired) {
            entries.remove(key);
            trace!(key, "Removed expired entry on read");
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl_secs: u64) -> StoreResult<()> {
        let entry = CacheEntry::new(Bytes::copy_from_slice(value), ttl_secs);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
