//! Value Objects for the Delivery Context
//!
//! Immutable value objects identifying and describing deliveries

use crate::shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a delivery
///
/// Encapsulates the validation rule for delivery numbers: the value must
/// not be blank after trimming whitespace. The inner field stays private
/// and serde routes through `TryFrom<String>`, so there is no construction
/// path that skips the check. The original, untrimmed value is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeliveryNumber(String);

impl DeliveryNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "delivery number cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeliveryNumber {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<DeliveryNumber> for String {
    fn from(number: DeliveryNumber) -> Self {
        number.0
    }
}

impl FromStr for DeliveryNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for DeliveryNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current state of a delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Pending => write!(f, "Pending"),
            DeliveryStatus::InTransit => write!(f, "InTransit"),
            DeliveryStatus::Delivered => write!(f, "Delivered"),
            DeliveryStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A single line item carried by a delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryItem {
    pub name: String,
    pub quantity: u32,
}

impl DeliveryItem {
    pub fn new(name: String, quantity: u32) -> Self {
        Self { name, quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delivery_number_rejects_empty_string() {
        let result = DeliveryNumber::new("");

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_delivery_number_rejects_whitespace_only() {
        for blank in ["   ", "\t", "\n", " \t \n "] {
            let result = DeliveryNumber::new(blank);
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "expected rejection for {blank:?}"
            );
        }
    }

    #[test]
    fn test_delivery_number_round_trips_original_value() {
        let number = DeliveryNumber::new("ORD-1001").unwrap();

        assert_eq!(number.to_string(), "ORD-1001");
        assert_eq!(number.as_str(), "ORD-1001");
    }

    #[test]
    fn test_delivery_number_preserves_untrimmed_input() {
        // Leading/trailing whitespace is legal as long as the trimmed
        // value is non-empty; the original spelling is kept.
        let number = DeliveryNumber::new("  ORD-7  ").unwrap();

        assert_eq!(number.to_string(), "  ORD-7  ");
    }

    #[test]
    fn test_delivery_number_structural_equality() {
        let a = DeliveryNumber::new("ORD-42").unwrap();
        let b = DeliveryNumber::new("ORD-42").unwrap();
        let c = DeliveryNumber::new("ORD-43").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_delivery_number_from_str() {
        let number: DeliveryNumber = "ORD-55".parse().unwrap();

        assert_eq!(number.as_str(), "ORD-55");
        assert!("  ".parse::<DeliveryNumber>().is_err());
    }

    #[test]
    fn test_delivery_number_serde_rejects_blank() {
        let result = serde_json::from_str::<DeliveryNumber>("\"   \"");

        assert!(result.is_err());
    }

    #[test]
    fn test_delivery_number_serde_round_trip() {
        let number = DeliveryNumber::new("ORD-9").unwrap();
        let json = serde_json::to_string(&number).unwrap();

        assert_eq!(json, "\"ORD-9\"");
        assert_eq!(serde_json::from_str::<DeliveryNumber>(&json).unwrap(), number);
    }

    #[test]
    fn test_delivery_status_display() {
        assert_eq!(DeliveryStatus::Pending.to_string(), "Pending");
        assert_eq!(DeliveryStatus::InTransit.to_string(), "InTransit");
        assert_eq!(DeliveryStatus::Delivered.to_string(), "Delivered");
        assert_eq!(DeliveryStatus::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_delivery_item_creation() {
        let item = DeliveryItem::new("bolts".to_string(), 12);

        assert_eq!(item.name, "bolts");
        assert_eq!(item.quantity, 12);
    }
}
