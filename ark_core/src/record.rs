use crate::error::InputError;

/// One persisted device log.
///
/// Fields are only reachable through accessors, so a record cannot change
/// between validation and the store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    created_at: i64,
    location: String,
    device_count: u32,
}

impl LogRecord {
    pub fn new(location: String, device_count: u32, created_at: i64) -> Result<LogRecord, InputError> {
        if location.is_empty() {
            return Err(InputError::EmptyLocation)
        }
        Ok(LogRecord { created_at, location, device_count })
    }

    /// Seconds since the Unix epoch. Not range checked.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn device_count(&self) -> u32 {
        self.device_count
    }
}

#[test]
fn test_new_record() {
    let record = LogRecord::new(String::from("Warehouse-A"), 12, 1700000000).unwrap();
    assert_eq!(record.location(), "Warehouse-A");
    assert_eq!(record.device_count(), 12);
    assert_eq!(record.created_at(), 1700000000);
}

#[test]
fn test_empty_location_rejected() {
    let result = LogRecord::new(String::new(), 3, 1700000000);
    assert!(matches!(result, Err(InputError::EmptyLocation)));
}

#[test]
fn test_negative_timestamp_kept() {
    let record = LogRecord::new(String::from("dock"), 0, -5).unwrap();
    assert_eq!(record.created_at(), -5);
}
