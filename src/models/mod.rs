//! Request and Response models for the fetch proxy
//!
//! This module defines the DTOs used for decoding query strings and
//! serializing JSON response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FetchQuery, FetchRequest, DEFAULT_TTL_SECS};
pub use responses::{HealthResponse, ProblemDocument};
