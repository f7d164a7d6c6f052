//! Delivery Repository Port
//!
//! Defines the interface for delivery persistence. The concrete storage
//! technology is an adapter concern; anything satisfying this capability
//! set is substitutable. Persistence failures surface as
//! `DomainError::Infrastructure` and are passed through unchanged by the
//! application layer.

use async_trait::async_trait;
use reparto_domain::{Delivery, DeliveryNumber, DomainResult};

/// Repository port for the Delivery aggregate
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Saves a delivery and returns the stored representation
    async fn save(&self, delivery: &Delivery) -> DomainResult<Delivery>;

    /// Finds a delivery by its number
    async fn find_by_number(&self, number: &DeliveryNumber) -> DomainResult<Option<Delivery>>;

    /// Deletes a delivery by its number; removing an absent key is a no-op
    async fn delete_by_number(&self, number: &DeliveryNumber) -> DomainResult<()>;
}
