//! Delivery Use Case Port
//!
//! The inbound port through which driving adapters invoke domain
//! behavior. Implementations must honor this contract exactly:
//! absence is an `Ok(None)`, never an error, and delete is idempotent.

use async_trait::async_trait;
use reparto_domain::{Delivery, DeliveryNumber, DomainResult};

/// Delivery use case port
#[async_trait]
pub trait DeliveryUseCase: Send + Sync {
    /// Persists a new delivery and returns the stored representation,
    /// including any server-assigned fields.
    async fn create_delivery(&self, delivery: Delivery) -> DomainResult<Delivery>;

    /// Returns the delivery for the given number, or `None` if absent.
    async fn get_delivery(&self, number: &DeliveryNumber) -> DomainResult<Option<Delivery>>;

    /// Removes the delivery for the given number. Deleting a number that
    /// was never created completes without error.
    async fn delete_delivery(&self, number: &DeliveryNumber) -> DomainResult<()>;
}
