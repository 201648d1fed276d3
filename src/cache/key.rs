//! Cache Key Module
//!
//! Derives store keys from origin URLs.

use std::fmt;

use sha1::{Digest, Sha1};

/// Suffix appended to the digest for the payload entry.
const DATA_SUFFIX: &str = ":data";

// == Cache Key ==
/// Lowercase hex SHA-1 digest of a URL's UTF-8 bytes.
///
/// Only the URL participates; the requested TTL does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Computes the key for `url`.
    pub fn from_url(url: &str) -> Self {
        let digest = Sha1::digest(url.as_bytes());
        Self(hex::encode(digest))
    }

    /// Returns the bare hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the store key holding the payload bytes.
    pub fn data_key(&self) -> String {
        format!("{}{}", self.0, DATA_SUFFIX)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
