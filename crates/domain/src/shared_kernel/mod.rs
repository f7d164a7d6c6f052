//! Shared Kernel - Common types shared across bounded contexts
//!
//! This module contains:
//! - Error types and DomainResult

pub mod error;

pub use error::{DomainError, DomainResult};
