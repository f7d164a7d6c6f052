//! Centralized API Router
//!
//! Single point of entry for all API routes, used by both the main
//! server and integration tests. Route registration is explicit; no
//! macro wiring.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::delivery_api::{AppState, delivery_api_routes};
use crate::error::{ApiError, ApiResult};
use crate::handlers;

/// Prometheus text exposition endpoint
async fn metrics_handler(State(state): State<AppState>) -> ApiResult<String> {
    state
        .metrics
        .gather()
        .map_err(|e| ApiError::Internal(format!("Failed to encode metrics: {}", e)))
}

/// Assembles the full application router
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .merge(delivery_api_routes())
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::server_status))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
