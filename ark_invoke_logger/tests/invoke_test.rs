use std::sync::Arc;
use std::time::SystemTime;
use ark_core::{LogHandler, LogRequest, MemoryLogStore, TimestampPolicy};
use ark_invoke_logger::function_handler;
use lambda_runtime::LambdaEvent;
use serde_json::json;

fn event(payload: serde_json::Value) -> LambdaEvent<LogRequest> {
    LambdaEvent {
        payload: serde_json::from_value(payload).unwrap(),
        context: Default::default()
    }
}

fn now() -> i64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap().as_secs() as i64
}

#[tokio::test]
async fn test_invoke_stamps_server_time() {
    let store = Arc::new(MemoryLogStore::new());
    let handler = LogHandler::new(store.clone(), TimestampPolicy::ServerClock);
    let before = now();
    let res = function_handler(&handler, event(json!({ "location": "building-1", "device_count": 200 }))).await;
    let after = now();

    assert!(res.is_ok());
    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location(), "building-1");
    assert_eq!(records[0].device_count(), 200);
    assert!(records[0].created_at() >= before && records[0].created_at() <= after);
}

#[tokio::test]
async fn test_invoke_missing_location() {
    let store = Arc::new(MemoryLogStore::new());
    let handler = LogHandler::new(store.clone(), TimestampPolicy::ServerClock);
    let res = function_handler(&handler, event(json!({ "device_count": 3 }))).await;

    let err = res.unwrap_err();
    assert_eq!(err.to_string(), "missing required field 'location'");
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_invoke_store_failure() {
    let store = Arc::new(MemoryLogStore::failing());
    let handler = LogHandler::new(store.clone(), TimestampPolicy::ServerClock);
    let res = function_handler(&handler, event(json!({ "location": "building-1", "device_count": 1 }))).await;

    assert!(res.is_err());
    assert!(store.records().is_empty());
}
