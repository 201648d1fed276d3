//! Cache-Aside Fetcher
//!
//! Looks a URL up in the store, falls back to the origin on a miss, and
//! back-fills the store with the requested TTL.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::cache::{CacheKey, PayloadStore};
use crate::error::Result;
use crate::fetch::origin::Origin;
use crate::models::FetchRequest;

/// Where a returned payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    Cache,
    Origin,
}

/// Bytes returned to the caller.
#[derive(Debug, Clone)]
pub struct FetchedPayload {
    pub body: Bytes,
    pub source: PayloadSource,
}

// == Cache-Aside Fetcher ==
/// Combines a [`PayloadStore`] and an [`Origin`].
///
/// Holds no per-request state; concurrent misses for the same URL each fetch
/// the origin and the last store write wins.
#[derive(Clone)]
pub struct CacheAsideFetcher {
    store: Arc<dyn PayloadStore>,
    origin: Arc<dyn Origin>,
}

impl CacheAsideFetcher {
    /// Creates a fetcher over the given store and origin.
    pub fn new(store: Arc<dyn PayloadStore>, origin: Arc<dyn Origin>) -> Self {
        Self { store, origin }
    }

    /// Returns the payload for `req.url`, from the store if present.
    ///
    /// Store failures never fail the request: a failed read is a miss and a
    /// failed write is logged and dropped. The origin status code is not
    /// inspected, so error pages are cached like any other body.
    pub async fn fetch(&self, req: &FetchRequest) -> Result<FetchedPayload> {
        let key = CacheKey::from_url(&req.url);
        let data_key = key.data_key();

        match self.store.get(&data_key).await {
            Ok(Some(body)) if !body.is_empty() => {
                debug!(url = %req.url, key = %key, "Cache hit");
                return Ok(FetchedPayload {
                    body,
                    source: PayloadSource::Cache,
                });
            }
            Ok(_) => debug!(url = %req.url, key = %key, "Cache miss"),
            Err(e) => warn!(
                url = %req.url,
                key = %key,
                error = %e,
                "Cache read failed, falling back to origin"
            ),
        }

        let response = self.origin.get(&req.url).await.inspect_err(|e| {
            warn!(url = %req.url, error = %e, "Origin fetch failed");
        })?;

        if !response.status.is_success() {
            warn!(
                url = %req.url,
                status = response.status.as_u16(),
                "Origin returned a non-success status, caching it as-is"
            );
        }

        if let Err(e) = self
            .store
            .set(&data_key, &response.body, req.ttl_secs)
            .await
        {
            warn!(url = %req.url, key = %key, error = %e, "Cache write failed");
        } else {
            debug!(url = %req.url, key = %key, ttl_secs = req.ttl_secs, "Cached origin payload");
        }

        Ok(FetchedPayload {
            body: response.body,
            source: PayloadSource::Origin,
        })
    }
}
