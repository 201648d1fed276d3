//! Origin Module
//!
//! Outbound HTTP GET against the caller-supplied URL.

use async_trait::async_trait;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::error::{ProxyError, Result};

/// A fully read origin response.
#[derive(Debug, Clone)]
pub struct OriginResponse {
    /// Status the origin answered with; not interpreted by the fetcher
    pub status: StatusCode,
    /// The complete response body
    pub body: Bytes,
}

/// Source of payloads on a cache miss.
#[async_trait]
pub trait Origin: Send + Sync + 'static {
    /// Issues a GET to `url` and reads the whole body.
    ///
    /// Fails with [`ProxyError::OriginUnreachable`] when the request cannot be
    /// sent and [`ProxyError::OriginReadFailed`] when the body cannot be read.
    async fn get(&self, url: &str) -> Result<OriginResponse>;
}

/// [`Origin`] implementation over a default `reqwest` client.
///
/// No timeout, retry, redirect override, proxy or custom headers are
/// configured.
#[derive(Debug, Clone, Default)]
pub struct HttpOrigin {
    client: reqwest::Client,
}

impl HttpOrigin {
    /// Creates an origin client with default transport settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Origin for HttpOrigin {
    async fn get(&self, url: &str) -> Result<OriginResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProxyError::OriginUnreachable(e.to_string()))?;

        let status = response.status();

        // The connection is released once the body is consumed or dropped.
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::OriginReadFailed(e.to_string()))?;

        Ok(OriginResponse { status, body })
    }
}
