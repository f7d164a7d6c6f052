//! Ports - Abstraction Layer
//!
//! This crate defines ports (traits) that sit at the boundary of the
//! domain core. The inbound port is what driving adapters (HTTP, CLI)
//! call; the outbound port is what the application layer consumes and
//! infrastructure adapters implement.

pub mod delivery_repository;
pub mod delivery_use_case;

pub use crate::delivery_repository::DeliveryRepository;
pub use crate::delivery_use_case::DeliveryUseCase;
