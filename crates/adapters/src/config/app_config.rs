//! Unified Application Configuration
//!
//! Centralized configuration structure for the entire application.
//! Resolution order: config file path, inline YAML, environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Unified application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Persistence backend configuration
    pub repository: RepositoryConfig,

    /// Delivery policy configuration
    pub delivery: DeliveryPolicyConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and file
    pub fn load() -> Result<Self> {
        let config = match (
            std::env::var("REPARTO_CONFIG_PATH").ok(),
            std::env::var("REPARTO_CONFIG_YAML").ok(),
        ) {
            (Some(path), None) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path));
                }
                let content = std::fs::read_to_string(&path).map_err(ConfigError::FileRead)?;
                serde_yaml::from_str(&content).map_err(ConfigError::ParseYaml)?
            }
            (None, Some(yaml)) => serde_yaml::from_str(&yaml).map_err(ConfigError::ParseYaml)?,
            _ => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            repository: RepositoryConfig::from_env()?,
            delivery: DeliveryPolicyConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.repository.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            repository: RepositoryConfig::default(),
            delivery: DeliveryPolicyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("REPARTO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("REPARTO_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("REPARTO_PORT".to_string()))?;

        Ok(Self { host, port })
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue(
                "server port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Persistence backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    InMemory,
    Redb,
}

impl FromStr for RepositoryBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inmemory" => Ok(RepositoryBackend::InMemory),
            "redb" => Ok(RepositoryBackend::Redb),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown repository backend: {}",
                other
            ))),
        }
    }
}

/// Persistence backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepositoryConfig {
    /// Which repository adapter to wire in at startup
    pub backend: RepositoryBackend,

    /// Database file path, required for the redb backend
    pub redb_path: Option<String>,
}

impl RepositoryConfig {
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("REPARTO_REPOSITORY_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => RepositoryBackend::InMemory,
        };

        let redb_path = std::env::var("REPARTO_REDB_PATH").ok();

        Ok(Self { backend, redb_path })
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == RepositoryBackend::Redb && self.redb_path.is_none() {
            return Err(ConfigError::InvalidValue(
                "redb backend selected but REPARTO_REDB_PATH not provided".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            backend: RepositoryBackend::InMemory,
            redb_path: None,
        }
    }
}

/// Delivery policy configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeliveryPolicyConfig {
    /// Reject creates that reuse an existing delivery number
    pub reject_duplicate_numbers: bool,
}

impl DeliveryPolicyConfig {
    pub fn from_env() -> Result<Self> {
        let reject_duplicate_numbers = std::env::var("REPARTO_REJECT_DUPLICATES")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| ConfigError::InvalidValue("REPARTO_REJECT_DUPLICATES".to_string()))?;

        Ok(Self {
            reject_duplicate_numbers,
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,

    /// Log format: "text" or "json"
    pub format: String,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        let level = std::env::var("REPARTO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let format = std::env::var("REPARTO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self { level, format })
    }

    pub fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown log format: {}",
                other
            ))),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    FileRead(std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    ParseYaml(serde_yaml::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
