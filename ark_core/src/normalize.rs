use crate::error::InputError;
use crate::record::LogRecord;
use serde::Deserialize;
use std::time::SystemTime;
use tracing::warn;

/// Body of a log request as sent by a scanner.
///
/// Every field is optional while decoding so that a missing field and a null
/// field end up in the same place; `normalize` decides what is required.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LogRequest {
    pub location: Option<String>,
    pub device_count: Option<u32>,
    pub created_at: Option<i64>,
}

/// Where `created_at` comes from. A handler uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Stamp the time the request is handled; `created_at` in the body is ignored.
    ServerClock,
    /// Use the caller's `created_at`, which must be present.
    CallerSupplied,
}

impl TimestampPolicy {
    fn created_at(&self, supplied: Option<i64>) -> Result<i64, InputError> {
        match self {
            TimestampPolicy::ServerClock => Ok(epoch_secs(SystemTime::now())),
            TimestampPolicy::CallerSupplied => supplied.ok_or(InputError::MissingField("created_at")),
        }
    }
}

fn epoch_secs(now: SystemTime) -> i64 {
    match now.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => {
            warn!("system clock is before the epoch ({}), stamping 0", e);
            0
        }
    }
}

pub fn parse_request(body: &[u8]) -> Result<LogRequest, InputError> {
    Ok(serde_json::from_slice(body)?)
}

pub fn normalize(request: LogRequest, policy: TimestampPolicy) -> Result<LogRecord, InputError> {
    let location = request.location.ok_or(InputError::MissingField("location"))?;
    let device_count = request.device_count.ok_or(InputError::MissingField("device_count"))?;
    let created_at = policy.created_at(request.created_at)?;
    LogRecord::new(location, device_count, created_at)
}

#[cfg(test)]
fn normalize_str(body: &str, policy: TimestampPolicy) -> Result<LogRecord, InputError> {
    normalize(parse_request(body.as_bytes())?, policy)
}

#[test]
fn test_caller_supplied() {
    let record = normalize_str(
        r#"{"location":"Warehouse-A","device_count":12,"created_at":1700000000}"#,
        TimestampPolicy::CallerSupplied
    ).unwrap();
    assert_eq!(record, LogRecord::new(String::from("Warehouse-A"), 12, 1700000000).unwrap());
}

#[test]
fn test_caller_supplied_requires_created_at() {
    let result = normalize_str(r#"{"location":"Warehouse-A","device_count":12}"#, TimestampPolicy::CallerSupplied);
    assert!(matches!(result, Err(InputError::MissingField("created_at"))));
}

#[test]
fn test_server_clock_ignores_created_at() {
    let before = epoch_secs(SystemTime::now());
    let record = normalize_str(
        r#"{"location":"Warehouse-A","device_count":12,"created_at":5}"#,
        TimestampPolicy::ServerClock
    ).unwrap();
    let after = epoch_secs(SystemTime::now());
    assert!(record.created_at() >= before && record.created_at() <= after);
}

#[test]
fn test_missing_device_count() {
    let result = normalize_str(r#"{"location":"Warehouse-A"}"#, TimestampPolicy::ServerClock);
    assert!(matches!(result, Err(InputError::MissingField("device_count"))));
}

#[test]
fn test_null_location() {
    let result = normalize_str(r#"{"location":null,"device_count":1,"created_at":1}"#, TimestampPolicy::CallerSupplied);
    assert!(matches!(result, Err(InputError::MissingField("location"))));
}

#[test]
fn test_wrong_types_are_malformed() {
    for body in [
        r#"{"location":"a","device_count":"12","created_at":1}"#,
        r#"{"location":"a","device_count":-1,"created_at":1}"#,
        r#"{"location":"a","device_count":1.5,"created_at":1}"#,
        r#"{"location":7,"device_count":1,"created_at":1}"#,
        r#"{"location":"a","device_count":1,"created_at":"yesterday"}"#,
        "not json",
        "",
    ] {
        let result = normalize_str(body, TimestampPolicy::CallerSupplied);
        assert!(matches!(result, Err(InputError::Malformed(_))), "{} should be malformed", body);
    }
}

#[test]
fn test_unknown_fields_ignored() {
    let record = normalize_str(
        r#"{"location":"b","device_count":0,"created_at":1,"firmware":"1.2"}"#,
        TimestampPolicy::CallerSupplied
    ).unwrap();
    assert_eq!(record.device_count(), 0);
}

#[test]
fn test_clock_before_epoch_stamps_zero() {
    let before_epoch = SystemTime::UNIX_EPOCH - std::time::Duration::from_secs(30);
    assert_eq!(epoch_secs(before_epoch), 0);
    assert_eq!(epoch_secs(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1700000000)), 1700000000);
}
