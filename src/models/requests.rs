//! Request DTOs for the fetch proxy
//!
//! Turns the raw query string of `GET /` into a typed [`FetchRequest`].

use std::borrow::Cow;

use percent_encoding::percent_decode;

use crate::error::{ProxyError, Result};

/// TTL in seconds written on a cache miss when `interval` is not supplied.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Raw query parameters as they arrive on the wire.
///
/// # Fields
/// - `url`: The origin URL to fetch
/// - `interval`: Optional cache TTL in seconds, still unparsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchQuery {
    pub url: Option<String>,
    pub interval: Option<String>,
}

/// A validated fetch request.
///
/// Only `url` participates in the cache key; `ttl_secs` only controls how
/// long a freshly fetched payload is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// The origin URL, byte-for-byte as supplied
    pub url: String,
    /// TTL in seconds for the cache write on a miss
    pub ttl_secs: u64,
}

impl FetchRequest {
    /// Parses and validates a raw query string (without the leading `?`).
    pub fn from_query(raw: Option<&str>) -> Result<Self> {
        FetchQuery::parse(raw.unwrap_or_default())?.validate()
    }
}

/// Undoes form encoding (`+` for space, then percent-escapes) as raw bytes.
fn unescape(raw: &str) -> Vec<u8> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode(spaced.as_bytes()).collect()
}

/// Decodes a parameter value.
///
/// Decoding is strict: bytes that are not UTF-8 are rejected rather than
/// replaced, so two different URLs never decode to the same string.
fn decode_value(name: &str, raw: &str) -> Result<String> {
    String::from_utf8(unescape(raw)).map_err(|e| {
        ProxyError::Validation(format!(
            "query parameter `{name}` is not valid UTF-8: {}",
            e.utf8_error()
        ))
    })
}

impl FetchQuery {
    /// Decodes a raw query string.
    ///
    /// Unknown parameters are ignored. A repeated parameter keeps its first
    /// value.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut query = FetchQuery::default();

        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            // Names only select a slot, so lossy decoding cannot merge values.
            let name = String::from_utf8_lossy(&unescape(name)).into_owned();
            let slot = match name.as_str() {
                "url" => &mut query.url,
                "interval" => &mut query.interval,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_value(&name, value)?);
            }
        }

        Ok(query)
    }

    /// Validates the decoded parameters.
    ///
    /// The URL is not checked structurally; whether it can be fetched is
    /// decided by the origin request itself.
    pub fn validate(self) -> Result<FetchRequest> {
        let url = match self.url {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(ProxyError::Validation(
                    "missing required query parameter `url`".to_string(),
                ))
            }
        };

        let ttl_secs = match self.interval.as_deref() {
            None | Some("") => DEFAULT_TTL_SECS,
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ProxyError::Validation(format!(
                    "query parameter `interval` must be a non-negative integer: {e}"
                ))
            })?,
        };

        Ok(FetchRequest { url, ttl_secs })
    }
}
