//! Fetch Module
//!
//! The origin client and the cache-aside algorithm built on top of it.

mod fetcher;
mod origin;

pub use fetcher::{CacheAsideFetcher, FetchedPayload, PayloadSource};
pub use origin::{HttpOrigin, Origin, OriginResponse};
