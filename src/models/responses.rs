//! Response DTOs for the fetch proxy
//!
//! Defines the structure of outgoing JSON bodies. Successful fetches return
//! raw bytes and have no DTO.

use serde::Serialize;

/// Problem document returned for every error condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDocument {
    /// Machine-readable error identifier (e.g. `errors:request/invalid-url`)
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short human-readable summary
    pub title: String,
    /// Human-readable explanation of this occurrence
    pub detail: String,
    /// HTTP status code
    pub status: u16,
}

impl ProblemDocument {
    /// Creates a new ProblemDocument
    pub fn new(
        problem_type: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
        status: u16,
    ) -> Self {
        Self {
            problem_type: problem_type.into(),
            title: title.into(),
            detail: detail.into(),
            status,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Process health status (always "healthy" when answering)
    pub status: String,
    /// Key-value store reachability ("up" or "down")
    pub store: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(store_up: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            store: if store_up { "up" } else { "down" }.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_document_serialize() {
        let doc = ProblemDocument::new(
            "errors:request/invalid-url",
            "Invalid URL",
            "connection refused",
            400,
        );
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "errors:request/invalid-url");
        assert_eq!(json["title"], "Invalid URL");
        assert_eq!(json["detail"], "connection refused");
        assert_eq!(json["status"], 400);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(false);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("\"store\":\"down\""));
        assert!(json.contains("timestamp"));
    }
}
