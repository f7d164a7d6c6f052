//! In-Memory Repository Implementation
//!
//! Default backend for development and tests. Concurrency discipline is
//! a read-write lock over the whole map; callers get no transactional
//! guarantees beyond single-operation atomicity.

use async_trait::async_trait;
use reparto_domain::{Delivery, DeliveryNumber, DomainResult};
use reparto_ports::DeliveryRepository;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory delivery repository
pub struct InMemoryDeliveryRepository {
    deliveries: Arc<RwLock<HashMap<DeliveryNumber, Delivery>>>,
}

impl InMemoryDeliveryRepository {
    pub fn new() -> Self {
        Self {
            deliveries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryDeliveryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryDeliveryRepository {
    async fn save(&self, delivery: &Delivery) -> DomainResult<Delivery> {
        let mut deliveries = self.deliveries.write().await;
        deliveries.insert(delivery.delivery_number.clone(), delivery.clone());
        Ok(delivery.clone())
    }

    async fn find_by_number(&self, number: &DeliveryNumber) -> DomainResult<Option<Delivery>> {
        let deliveries = self.deliveries.read().await;
        Ok(deliveries.get(number).cloned())
    }

    async fn delete_by_number(&self, number: &DeliveryNumber) -> DomainResult<()> {
        let mut deliveries = self.deliveries.write().await;
        deliveries.remove(number);
        Ok(())
    }
}
