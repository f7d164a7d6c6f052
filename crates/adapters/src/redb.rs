//! Redb (Embedded Key-Value Store) Delivery Repository
//!
//! Persistent implementation using Redb for embedded storage. Records
//! are keyed by the delivery number string and stored as JSON.

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, TableError};
use reparto_domain::{Delivery, DeliveryNumber, DomainError, DomainResult};
use reparto_ports::DeliveryRepository;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Table definition for deliveries, keyed by delivery number
const DELIVERIES_TABLE: TableDefinition<&str, Vec<u8>> = TableDefinition::new("deliveries");

/// Redb delivery repository
#[derive(Clone)]
pub struct RedbDeliveryRepository {
    db: Arc<Mutex<Database>>,
}

impl RedbDeliveryRepository {
    /// Create a repository backed by a database file
    pub fn new_with_path(path: &str) -> DomainResult<Self> {
        let db = Database::create(path).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create Redb database: {}", e))
        })?;

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Create a repository backed by an in-memory database (tests)
    pub fn new_in_memory() -> DomainResult<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to create Redb database: {}", e))
            })?;

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> DomainResult<()> {
        info!("Initializing Redb schema for deliveries");

        let db = self.db.lock().await;
        let tx = db.begin_write().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to begin transaction: {}", e))
        })?;

        tx.open_table(DELIVERIES_TABLE).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to create deliveries table: {}", e))
        })?;

        tx.commit().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    fn delivery_to_bytes(delivery: &Delivery) -> DomainResult<Vec<u8>> {
        serde_json::to_vec(delivery).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to serialize delivery: {}", e))
        })
    }

    fn bytes_to_delivery(data: &[u8]) -> DomainResult<Delivery> {
        serde_json::from_slice(data).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to deserialize delivery: {}", e))
        })
    }
}

#[async_trait]
impl DeliveryRepository for RedbDeliveryRepository {
    async fn save(&self, delivery: &Delivery) -> DomainResult<Delivery> {
        debug!(delivery_number = %delivery.delivery_number, "Saving delivery");

        let db = self.db.lock().await;
        let tx = db.begin_write().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to begin transaction: {}", e))
        })?;

        {
            let mut table = tx.open_table(DELIVERIES_TABLE).map_err(|e| {
                DomainError::Infrastructure(format!("Failed to open deliveries table: {}", e))
            })?;

            let value = Self::delivery_to_bytes(delivery)?;
            table
                .insert(delivery.delivery_number.as_str(), value)
                .map_err(|e| {
                    DomainError::Infrastructure(format!("Failed to insert delivery: {}", e))
                })?;
        }

        tx.commit().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(delivery.clone())
    }

    async fn find_by_number(&self, number: &DeliveryNumber) -> DomainResult<Option<Delivery>> {
        let db = self.db.lock().await;
        let tx = db.begin_read().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to begin transaction: {}", e))
        })?;

        let table = match tx.open_table(DELIVERIES_TABLE) {
            Ok(table) => table,
            // Nothing was ever written
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => {
                return Err(DomainError::Infrastructure(format!(
                    "Failed to open deliveries table: {}",
                    e
                )));
            }
        };

        let value = table.get(number.as_str()).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to get delivery: {}", e))
        })?;

        match value {
            Some(guard) => Ok(Some(Self::bytes_to_delivery(&guard.value())?)),
            None => Ok(None),
        }
    }

    async fn delete_by_number(&self, number: &DeliveryNumber) -> DomainResult<()> {
        debug!(delivery_number = %number, "Deleting delivery");

        let db = self.db.lock().await;
        let tx = db.begin_write().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to begin transaction: {}", e))
        })?;

        {
            let mut table = tx.open_table(DELIVERIES_TABLE).map_err(|e| {
                DomainError::Infrastructure(format!("Failed to open deliveries table: {}", e))
            })?;

            table.remove(number.as_str()).map_err(|e| {
                DomainError::Infrastructure(format!("Failed to delete delivery: {}", e))
            })?;
        }

        tx.commit().map_err(|e| {
            DomainError::Infrastructure(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }
}
