//! Application Service for Delivery Management

use std::sync::Arc;

use async_trait::async_trait;
use reparto_domain::{Delivery, DeliveryNumber, DomainError, DomainResult};
use reparto_ports::{DeliveryRepository, DeliveryUseCase};
use tracing::{debug, info};

/// Policy knobs for the delivery service, fixed at process start.
#[derive(Debug, Clone, Default)]
pub struct DeliveryServiceConfig {
    /// When set, creating a delivery whose number is already stored
    /// fails with a conflict instead of overwriting. The base use-case
    /// contract does not require uniqueness, so this is off by default.
    pub reject_duplicate_numbers: bool,
}

/// Sole implementation of the delivery use case port.
///
/// Delegates directly to the injected repository; each operation is a
/// single independent call with no ordering dependency on the others.
/// Concurrency discipline is the repository's responsibility.
pub struct DeliveryService {
    delivery_repo: Arc<dyn DeliveryRepository>,
    config: DeliveryServiceConfig,
}

impl DeliveryService {
    pub fn new(delivery_repo: Arc<dyn DeliveryRepository>) -> Self {
        Self {
            delivery_repo,
            config: DeliveryServiceConfig::default(),
        }
    }

    pub fn with_config(
        delivery_repo: Arc<dyn DeliveryRepository>,
        config: DeliveryServiceConfig,
    ) -> Self {
        Self {
            delivery_repo,
            config,
        }
    }
}

#[async_trait]
impl DeliveryUseCase for DeliveryService {
    async fn create_delivery(&self, delivery: Delivery) -> DomainResult<Delivery> {
        if self.config.reject_duplicate_numbers
            && self
                .delivery_repo
                .find_by_number(&delivery.delivery_number)
                .await?
                .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "delivery {} already exists",
                delivery.delivery_number
            )));
        }

        let stored = self.delivery_repo.save(&delivery).await?;
        info!(delivery_number = %stored.delivery_number, "Delivery created");
        Ok(stored)
    }

    async fn get_delivery(&self, number: &DeliveryNumber) -> DomainResult<Option<Delivery>> {
        debug!(delivery_number = %number, "Looking up delivery");
        self.delivery_repo.find_by_number(number).await
    }

    async fn delete_delivery(&self, number: &DeliveryNumber) -> DomainResult<()> {
        self.delivery_repo.delete_by_number(number).await?;
        info!(delivery_number = %number, "Delivery deleted");
        Ok(())
    }
}
