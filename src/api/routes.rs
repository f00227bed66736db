//! API Routes
//!
//! Configures the Axum router with all calculation server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{calculate_handler, health_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
/// - `GET /:operation?x=..&y=..` - Compute (or serve cached) result
///
/// Static routes take precedence, so `/stats` and `/health` are never
/// captured as operation names.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/:operation", get(calculate_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
