//! Delivery Aggregate Root
//!
//! The Delivery entity is the aggregate root for delivery management.

use super::value_objects::{DeliveryItem, DeliveryNumber, DeliveryStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery aggregate root
///
/// Identified by its delivery number. The only invariant is a valid
/// `DeliveryNumber`, which the number's own construction already enforces;
/// the aggregate carries no further business rules and is not mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub delivery_number: DeliveryNumber,
    pub destination: String,
    pub items: Vec<DeliveryItem>,
    pub status: DeliveryStatus,
    pub created_at: DateTime<Utc>,
}

impl Delivery {
    /// Creates a new delivery in Pending state
    pub fn new(
        delivery_number: DeliveryNumber,
        destination: String,
        items: Vec<DeliveryItem>,
    ) -> Self {
        Self {
            delivery_number,
            destination,
            items,
            status: DeliveryStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_delivery(number: &str) -> Delivery {
        Delivery::new(
            DeliveryNumber::new(number).unwrap(),
            "Calle Mayor 1, Bilbao".to_string(),
            vec![DeliveryItem::new("bolts".to_string(), 12)],
        )
    }

    #[test]
    fn test_new_delivery_starts_pending() {
        let delivery = sample_delivery("ORD-1001");

        assert_eq!(delivery.status, DeliveryStatus::Pending);
        assert_eq!(delivery.delivery_number.as_str(), "ORD-1001");
        assert_eq!(delivery.destination, "Calle Mayor 1, Bilbao");
        assert_eq!(delivery.items.len(), 1);
    }

    #[test]
    fn test_delivery_identity_is_the_number() {
        let a = sample_delivery("ORD-1001");
        let b = sample_delivery("ORD-2002");

        assert_ne!(a.delivery_number, b.delivery_number);
        assert_eq!(
            a.delivery_number,
            DeliveryNumber::new("ORD-1001").unwrap()
        );
    }

    #[test]
    fn test_delivery_serde_round_trip() {
        let delivery = sample_delivery("ORD-77");
        let json = serde_json::to_string(&delivery).unwrap();
        let back: Delivery = serde_json::from_str(&json).unwrap();

        assert_eq!(back, delivery);
    }
}
