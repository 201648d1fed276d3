//! API Module
//!
//! HTTP handlers and routing for the fetch proxy.
//!
//! # Endpoints
//! - `GET /?url=<url>&interval=<seconds>` - Fetch a URL through the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
