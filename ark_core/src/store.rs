use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::record::LogRecord;
use async_trait::async_trait;
use aws_sdk_dynamodb as ddb;
use aws_sdk_dynamodb::model::AttributeValue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// Somewhere a `LogRecord` can be written once.
///
/// Implementations are shared between concurrent requests.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn put(&self, record: &LogRecord) -> Result<(), StoreError>;
}

pub struct DynamoLogStore {
    client: ddb::Client,
    table_name: String,
}

impl DynamoLogStore {
    pub fn new(client: ddb::Client, table_name: impl Into<String>) -> DynamoLogStore {
        DynamoLogStore { client, table_name: table_name.into() }
    }

    pub async fn from_config(config: &StoreConfig) -> DynamoLogStore {
        DynamoLogStore::new(config.load_client().await, config.table_name.to_owned())
    }
}

#[async_trait]
impl LogStore for DynamoLogStore {
    async fn put(&self, record: &LogRecord) -> Result<(), StoreError> {
        debug!("put_item into {}: {:?}", self.table_name, record);
        self.client.put_item()
            .table_name(self.table_name.to_owned())
            .item("Location", AttributeValue::S(record.location().to_string()))
            .item("CreatedAt", AttributeValue::N(record.created_at().to_string()))
            .item("DeviceCount", AttributeValue::N(record.device_count().to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}

/// Keeps written records in memory. Can be switched to reject every write.
#[derive(Default)]
pub struct MemoryLogStore {
    records: Mutex<Vec<LogRecord>>,
    failing: AtomicBool,
}

impl MemoryLogStore {
    pub fn new() -> MemoryLogStore {
        MemoryLogStore::default()
    }

    pub fn failing() -> MemoryLogStore {
        let store = MemoryLogStore::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone()
        }
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn put(&self, record: &LogRecord) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Write(String::from("memory store is failing")))
        }
        self.records.lock()
            .map_err(|e| StoreError::Write(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}
