//! Error types for the fetch proxy
//!
//! Every request-time failure is a [`ProxyError`], rendered at the HTTP
//! boundary as an `application/problem+json` document.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ProblemDocument;

/// Content type of every error response.
pub const PROBLEM_JSON: &str = "application/problem+json";

// == Proxy Error Enum ==
/// Unified request-time error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    /// Missing or malformed query parameters
    #[error("{0}")]
    Validation(String),

    /// The origin request could not be issued or completed at the transport level
    #[error("{0}")]
    OriginUnreachable(String),

    /// The origin answered but its body could not be fully read
    #[error("{0}")]
    OriginReadFailed(String),
}

impl ProxyError {
    /// Machine-readable problem type identifier.
    pub fn problem_type(&self) -> &'static str {
        match self {
            ProxyError::Validation(_) => "errors:params/invalid-query-parameters",
            ProxyError::OriginUnreachable(_) | ProxyError::OriginReadFailed(_) => {
                "errors:request/invalid-url"
            }
        }
    }

    /// Short human-readable summary.
    pub fn title(&self) -> &'static str {
        match self {
            ProxyError::Validation(_) => "Invalid Query Parameters",
            ProxyError::OriginUnreachable(_) => "Invalid URL",
            ProxyError::OriginReadFailed(_) => "Error While Reading The Body",
        }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_)
            | ProxyError::OriginUnreachable(_)
            | ProxyError::OriginReadFailed(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Converts the error into its wire document.
    pub fn to_problem(&self) -> ProblemDocument {
        ProblemDocument::new(
            self.problem_type(),
            self.title(),
            self.to_string(),
            self.status().as_u16(),
        )
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self.to_problem())).into_response();
        // Json sets application/json; problem documents need their own media type.
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the fetch proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
