//! Adapters - Infrastructure Implementations
//!
//! This crate contains the implementations of the ports defined in
//! reparto-ports, plus the unified application configuration.

pub mod config;
pub mod redb;
pub mod repositories;

pub use crate::config::{
    AppConfig, ConfigError, DeliveryPolicyConfig, LoggingConfig, RepositoryBackend,
    RepositoryConfig, ServerConfig,
};
pub use crate::redb::RedbDeliveryRepository;
pub use crate::repositories::InMemoryDeliveryRepository;
