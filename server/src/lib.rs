//! Reparto Server - HTTP Adapter
//!
//! Axum-based inbound adapter: translates HTTP requests into calls on
//! the delivery use case port and domain results back into HTTP
//! responses. Exposed as a library so integration tests can build the
//! same router the binary serves.

pub mod api_router;
pub mod delivery_api;
pub mod error;
pub mod handlers;
pub mod metrics;

pub use api_router::create_api_router;
pub use delivery_api::AppState;
pub use metrics::MetricsRegistry;
