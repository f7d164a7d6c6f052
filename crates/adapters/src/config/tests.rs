//! Tests for unified application configuration

use crate::config::{AppConfig, ConfigError, RepositoryBackend};
use serial_test::serial;

fn cleanup_env_vars() {
    unsafe {
        let vars = [
            "REPARTO_HOST",
            "REPARTO_PORT",
            "REPARTO_REPOSITORY_BACKEND",
            "REPARTO_REDB_PATH",
            "REPARTO_REJECT_DUPLICATES",
            "REPARTO_LOG_LEVEL",
            "REPARTO_LOG_FORMAT",
            "REPARTO_CONFIG_PATH",
            "REPARTO_CONFIG_YAML",
        ];
        for var in vars {
            std::env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_defaults_from_empty_environment() {
    cleanup_env_vars();

    let config = AppConfig::load().unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.repository.backend, RepositoryBackend::InMemory);
    assert!(!config.delivery.reject_duplicate_numbers);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "text");
}

#[test]
#[serial]
fn test_environment_overrides() {
    cleanup_env_vars();
    unsafe {
        std::env::set_var("REPARTO_HOST", "127.0.0.1");
        std::env::set_var("REPARTO_PORT", "9090");
        std::env::set_var("REPARTO_REPOSITORY_BACKEND", "redb");
        std::env::set_var("REPARTO_REDB_PATH", "/tmp/reparto-test.redb");
        std::env::set_var("REPARTO_REJECT_DUPLICATES", "true");
        std::env::set_var("REPARTO_LOG_FORMAT", "json");
    }

    let config = AppConfig::load().unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.repository.backend, RepositoryBackend::Redb);
    assert_eq!(
        config.repository.redb_path.as_deref(),
        Some("/tmp/reparto-test.redb")
    );
    assert!(config.delivery.reject_duplicate_numbers);
    assert_eq!(config.logging.format, "json");

    cleanup_env_vars();
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    cleanup_env_vars();
    unsafe {
        std::env::set_var("REPARTO_PORT", "not-a-port");
    }

    let result = AppConfig::load();

    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    cleanup_env_vars();
}

#[test]
#[serial]
fn test_redb_backend_requires_path() {
    cleanup_env_vars();
    unsafe {
        std::env::set_var("REPARTO_REPOSITORY_BACKEND", "redb");
    }

    let result = AppConfig::load();

    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    cleanup_env_vars();
}

#[test]
#[serial]
fn test_unknown_backend_is_rejected() {
    cleanup_env_vars();
    unsafe {
        std::env::set_var("REPARTO_REPOSITORY_BACKEND", "cassandra");
    }

    let result = AppConfig::load();

    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    cleanup_env_vars();
}

#[test]
#[serial]
fn test_inline_yaml_configuration() {
    cleanup_env_vars();
    let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8081
repository:
  backend: inmemory
  redb_path: null
delivery:
  reject_duplicate_numbers: true
logging:
  level: "debug"
  format: "text"
"#;
    unsafe {
        std::env::set_var("REPARTO_CONFIG_YAML", yaml);
    }

    let config = AppConfig::load().unwrap();

    assert_eq!(config.server.port, 8081);
    assert_eq!(config.logging.level, "debug");
    assert!(config.delivery.reject_duplicate_numbers);

    cleanup_env_vars();
}
