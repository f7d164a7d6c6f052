//! Unified application configuration

pub mod app_config;

#[cfg(test)]
mod tests;

pub use app_config::{
    AppConfig, ConfigError, DeliveryPolicyConfig, LoggingConfig, RepositoryBackend,
    RepositoryConfig, ServerConfig,
};
