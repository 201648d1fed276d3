//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and the in-process store.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{CacheKey, MemoryStore, PayloadStore};

// == Strategies ==
/// Generates URL-shaped strings
fn url_strategy() -> impl Strategy<Value = String> {
    ("https?", "[a-z0-9]{1,16}", "(/[a-zA-Z0-9_.~-]{0,12}){0,4}")
        .prop_map(|(scheme, host, path)| format!("{scheme}://{host}.example{path}"))
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Identical URLs always produce the same key.
    #[test]
    fn prop_key_is_deterministic(url in any::<String>()) {
        let first = CacheKey::from_url(&url);
        let second = CacheKey::from_url(&url);
        prop_assert_eq!(first.as_str().len(), 40);
        prop_assert_eq!(first, second);
    }

    // Distinct URLs in a corpus never collide.
    #[test]
    fn prop_distinct_urls_have_distinct_keys(
        urls in prop::collection::hash_set(url_strategy(), 1..64)
    ) {
        let keys: HashSet<String> = urls
            .iter()
            .map(|url| CacheKey::from_url(url).data_key())
            .collect();
        prop_assert_eq!(keys.len(), urls.len());
    }

    // The data key is always the digest followed by ":data".
    #[test]
    fn prop_data_key_shape(url in url_strategy()) {
        let key = CacheKey::from_url(&url);
        let data_key = key.data_key();
        prop_assert!(data_key.ends_with(":data"));
        prop_assert_eq!(&data_key[..40], key.as_str());
    }

    // Whatever bytes are written are read back unchanged.
    #[test]
    fn prop_memory_store_round_trip(
        key in "[a-f0-9]{40}:data",
        value in prop::collection::vec(any::<u8>(), 0..512),
        ttl in 1u64..100_000,
    ) {
        let rt = runtime();
        let (read, stored_ttl) = rt.block_on(async {
            let store = MemoryStore::new();
            store.set(&key, &value, ttl).await.unwrap();
            (store.get(&key).await.unwrap(), store.ttl_secs(&key).await)
        });
        prop_assert_eq!(read.as_deref(), Some(value.as_slice()));
        prop_assert_eq!(stored_ttl, Some(Some(ttl)));
    }
}
