//! Application Layer - Use Case Implementations
//!
//! Orchestrates domain objects and outbound ports. The only business
//! rule lives in the domain (`DeliveryNumber` construction); services
//! here delegate to the persistence port and apply configured policy.

pub mod delivery_service;

pub use crate::delivery_service::{DeliveryService, DeliveryServiceConfig};
