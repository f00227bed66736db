//! API Handlers
//!
//! HTTP request handlers for each calculation server endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::cache::{normalize_key, ResultCache};
use crate::calc::{evaluate, Operation};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CalcParams, CalcResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Contains the result cache wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe result cache
    pub cache: Arc<RwLock<ResultCache>>,
}

impl AppState {
    /// Creates a new AppState with the given result cache.
    pub fn new(cache: ResultCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ResultCache::new(Duration::from_secs(config.cache_ttl)))
    }
}

/// Handler for GET /:operation
///
/// Parses the operation and operands, serves a cached result when a live one
/// exists for the canonical key, and otherwise computes, caches, and returns
/// the fresh result.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    Query(params): Query<CalcParams>,
) -> Result<Json<CalcResponse>> {
    let operation: Operation = operation.parse()?;
    let (x, y) = params.parse()?;

    let key = normalize_key(operation, x, y);

    // Write lock even for lookup: expired entries are removed in place
    {
        let mut cache = state.cache.write().await;
        if let Some(value) = cache.get(&key) {
            debug!("cache hit for key {}: {}", key, value);
            return Ok(Json(CalcResponse::new(operation, x, y, value, true)));
        }
    }

    let answer = evaluate(operation, x, y)?;

    // A failed store is logged and the fresh result served anyway; the
    // response never depends on cache availability.
    {
        let mut cache = state.cache.write().await;
        match cache.set_or_update(&key, answer) {
            Ok(()) => debug!("cached result for key {}: {}", key, answer),
            Err(err) => warn!("failed to cache result for key {}: {}", key, err),
        }
    }

    Ok(Json(CalcResponse::new(operation, x, y, answer, false)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Read lock is enough for stats
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.expirations,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    fn test_state() -> AppState {
        AppState::new(ResultCache::new(Duration::from_secs(60)))
    }

    fn params(x: &str, y: &str) -> CalcParams {
        CalcParams {
            x: Some(x.to_string()),
            y: Some(y.to_string()),
        }
    }

    #[tokio::test]
    async fn test_calculate_handler_add() {
        let state = test_state();

        let response = calculate_handler(
            State(state),
            Path("add".to_string()),
            Query(params("2", "1")),
        )
        .await
        .unwrap();

        assert_eq!(response.answer, 3.0);
        assert!(!response.cached);
    }

    #[tokio::test]
    async fn test_calculate_handler_swapped_operands_served_from_cache() {
        let state = test_state();

        let first = calculate_handler(
            State(state.clone()),
            Path("add".to_string()),
            Query(params("2", "1")),
        )
        .await
        .unwrap();
        assert!(!first.cached);

        // Same calculation with operands swapped shares the canonical key
        let second = calculate_handler(
            State(state),
            Path("add".to_string()),
            Query(params("1", "2")),
        )
        .await
        .unwrap();

        assert_eq!(second.answer, 3.0);
        assert!(second.cached);
    }

    #[tokio::test]
    async fn test_calculate_handler_subtract_order_matters() {
        let state = test_state();

        calculate_handler(
            State(state.clone()),
            Path("subtract".to_string()),
            Query(params("3", "2")),
        )
        .await
        .unwrap();

        let swapped = calculate_handler(
            State(state),
            Path("subtract".to_string()),
            Query(params("2", "3")),
        )
        .await
        .unwrap();

        assert_eq!(swapped.answer, -1.0);
        assert!(!swapped.cached);
    }

    #[tokio::test]
    async fn test_calculate_handler_unknown_operation() {
        let state = test_state();

        let result = calculate_handler(
            State(state),
            Path("modulo".to_string()),
            Query(params("2", "1")),
        )
        .await;

        assert!(matches!(result, Err(CalcError::UnknownOperation(_))));
    }

    #[tokio::test]
    async fn test_calculate_handler_missing_param() {
        let state = test_state();

        let result = calculate_handler(
            State(state),
            Path("add".to_string()),
            Query(CalcParams {
                x: Some("2".to_string()),
                y: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(CalcError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_calculate_handler_division_by_zero() {
        let state = test_state();

        let result = calculate_handler(
            State(state),
            Path("divide".to_string()),
            Query(params("1", "0")),
        )
        .await;

        assert!(matches!(result, Err(CalcError::DivisionByZero)));
    }

    #[tokio::test]
    async fn test_division_by_zero_not_cached() {
        let state = test_state();

        let _ = calculate_handler(
            State(state.clone()),
            Path("divide".to_string()),
            Query(params("1", "0")),
        )
        .await;

        let cache = state.cache.read().await;
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        calculate_handler(
            State(state.clone()),
            Path("add".to_string()),
            Query(params("2", "1")),
        )
        .await
        .unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_concurrent_requests_distinct_keys() {
        let state = test_state();

        let mut handles = Vec::new();
        for i in 0..16i32 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                calculate_handler(
                    State(state),
                    Path("add".to_string()),
                    Query(params(&i.to_string(), "1")),
                )
                .await
                .unwrap()
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let response = handle.await.unwrap();
            assert_eq!(response.answer, i as f64 + 1.0);
        }

        // Every key cached exactly once, each lookup now hits
        for i in 0..16i32 {
            let response = calculate_handler(
                State(state.clone()),
                Path("add".to_string()),
                Query(params(&i.to_string(), "1")),
            )
            .await
            .unwrap();
            assert_eq!(response.answer, i as f64 + 1.0);
            assert!(response.cached);
        }
    }
}
