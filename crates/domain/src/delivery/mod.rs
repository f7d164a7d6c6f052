//! Delivery Bounded Context
//!
//! Manages deliveries from registration to removal
//! - Delivery aggregate root
//! - Delivery number and item value objects

pub mod entities;
pub mod value_objects;

// Re-exports
pub use entities::Delivery;
pub use value_objects::{DeliveryItem, DeliveryNumber, DeliveryStatus};
