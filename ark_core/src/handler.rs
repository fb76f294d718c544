use crate::error::LogError;
use crate::normalize::{normalize, parse_request, LogRequest, TimestampPolicy};
use crate::record::LogRecord;
use crate::store::LogStore;
use std::sync::Arc;
use tracing::{info, warn};

pub const ONLINE: &str = "Function is online";
pub const SUCCESS: &str = "Success!";
pub const BAD_INPUT: &str = "bad input";
pub const STORE_FAILED: &str = "unable to store log";
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Status and plain-text body for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: &'static str,
}

impl Reply {
    const fn new(status: u16, body: &'static str) -> Reply {
        Reply { status, body }
    }
}

/// Validates log requests and writes them to a store.
///
/// Built once per process; the store is shared by every request the host
/// hands to it.
#[derive(Clone)]
pub struct LogHandler {
    store: Arc<dyn LogStore>,
    policy: TimestampPolicy,
}

impl LogHandler {
    pub fn new(store: Arc<dyn LogStore>, policy: TimestampPolicy) -> LogHandler {
        LogHandler { store, policy }
    }

    pub async fn handle(&self, method: &str, body: &[u8]) -> Reply {
        match method {
            "GET" => Reply::new(200, ONLINE),
            "POST" => match self.ingest(body).await {
                Ok(_) => Reply::new(200, SUCCESS),
                Err(LogError::Input(_)) => Reply::new(400, BAD_INPUT),
                // Store failures share the client error status with bad input.
                Err(LogError::Store(_)) => Reply::new(400, STORE_FAILED),
            },
            _ => {
                info!("rejecting method {}", method);
                Reply::new(405, METHOD_NOT_ALLOWED)
            }
        }
    }

    pub async fn ingest(&self, body: &[u8]) -> Result<LogRecord, LogError> {
        let request = parse_request(body).map_err(|e| {
            warn!("bad input: {}", e);
            e
        })?;
        self.record(request).await
    }

    /// Normalizes an already decoded request and writes it.
    pub async fn record(&self, request: LogRequest) -> Result<LogRecord, LogError> {
        let record = match normalize(request, self.policy) {
            Ok(record) => record,
            Err(e) => {
                warn!("bad input: {}", e);
                return Err(e.into())
            }
        };
        if let Err(e) = self.store.put(&record).await {
            warn!("error storing {:?}: {}", record, e);
            return Err(e.into())
        }
        info!("stored log for {} ({} devices) at {}", record.location(), record.device_count(), record.created_at());
        Ok(record)
    }
}
