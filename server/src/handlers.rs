//! HTTP Request Handlers
//!
//! Operational endpoints for the Reparto server.

use axum::Json;
use serde_json::json;

/// Health check endpoint
pub async fn health_check() -> String {
    "ok".to_string()
}

/// Server status endpoint with detailed information
pub async fn server_status() -> Json<serde_json::Value> {
    tracing::info!("🔍 Server status requested");

    let status = json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    Json(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_server_status_carries_version() {
        let Json(status) = server_status().await;

        assert_eq!(status["status"], "running");
        assert_eq!(status["version"], env!("CARGO_PKG_VERSION"));
    }
}
