//! API Module
//!
//! HTTP handlers and routing for the calculation server REST API.
//!
//! # Endpoints
//! - `GET /:operation?x=..&y=..` - Compute (or serve cached) result
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
