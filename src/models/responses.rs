//! Response DTOs for the calculation API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::calc::Operation;

/// Response body for a calculation (GET /:operation)
#[derive(Debug, Clone, Serialize)]
pub struct CalcResponse {
    /// The operation that was performed
    pub action: Operation,
    /// The computed (or cached) result
    pub answer: f64,
    /// First operand, as supplied by the caller
    pub x: f64,
    /// Second operand, as supplied by the caller
    pub y: f64,
    /// Whether the answer was served from the result cache
    pub cached: bool,
}

impl CalcResponse {
    /// Creates a new CalcResponse
    pub fn new(action: Operation, x: f64, y: f64, answer: f64, cached: bool) -> Self {
        Self {
            action,
            answer,
            x,
            y,
            cached,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by TTL expiry
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, expirations: u64, total_entries: usize) -> Self {
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            hits as f64 / total_lookups as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            expirations,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    #[allow(dead_code)]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
