//! Reparto Delivery Server

use std::sync::Arc;

use reparto_adapters::{
    AppConfig, InMemoryDeliveryRepository, LoggingConfig, RedbDeliveryRepository,
    RepositoryBackend,
};
use reparto_application::{DeliveryService, DeliveryServiceConfig};
use reparto_ports::DeliveryRepository;
use reparto_server::{AppState, MetricsRegistry, create_api_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    info!("🚀 Starting Reparto Delivery Server");

    // Initialize DI container
    let delivery_repo: Arc<dyn DeliveryRepository> = match config.repository.backend {
        RepositoryBackend::InMemory => {
            info!("Using in-memory delivery repository");
            Arc::new(InMemoryDeliveryRepository::new())
        }
        RepositoryBackend::Redb => {
            let path = config
                .repository
                .redb_path
                .as_deref()
                .ok_or("redb backend selected but no database path configured")?;
            info!(path, "Using redb delivery repository");
            let repo = RedbDeliveryRepository::new_with_path(path)?;
            repo.init_schema().await?;
            Arc::new(repo)
        }
    };

    let delivery_service = Arc::new(DeliveryService::with_config(
        delivery_repo,
        DeliveryServiceConfig {
            reject_duplicate_numbers: config.delivery.reject_duplicate_numbers,
        },
    ));

    let metrics = MetricsRegistry::new()?;

    let app = create_api_router(AppState {
        delivery_use_case: delivery_service,
        metrics,
    });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("📡 HTTP API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
