//! Domain Error Types
//!
//! Centralized error handling for the domain layer. Absence of an
//! aggregate is not an error: lookups return `Option` and callers check
//! for absence explicitly.

/// Result type for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Main domain error enum
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}
