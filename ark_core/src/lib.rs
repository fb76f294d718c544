pub mod config;
pub mod error;
pub mod handler;
pub mod normalize;
pub mod record;
pub mod store;

pub use config::StoreConfig;
pub use error::{InputError, LogError, StoreError};
pub use handler::{LogHandler, Reply};
pub use normalize::{normalize, parse_request, LogRequest, TimestampPolicy};
pub use record::LogRecord;
pub use store::{DynamoLogStore, LogStore, MemoryLogStore};
