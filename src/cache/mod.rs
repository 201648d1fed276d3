//! Cache Module
//!
//! Key derivation and the key-value store seam, with Redis and in-process
//! backends.

mod entry;
mod key;
mod memory;
mod redis;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use store::{PayloadStore, StoreError, StoreResult};
