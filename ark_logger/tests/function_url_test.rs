use std::sync::Arc;
use ark_core::{LogHandler, LogRecord, MemoryLogStore, TimestampPolicy};
use ark_logger::function_handler;
use lambda_http::http::{Method, Request, StatusCode};
use lambda_http::{Body, Response};
use serde_json::json;

fn request(method: Method, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("https://example.lambda-url.us-east-1.on.aws/")
        .body(body)
        .unwrap()
}

fn text(resp: &Response<Body>) -> String {
    match resp.body() {
        Body::Text(s) => s.to_owned(),
        Body::Binary(b) => String::from_utf8(b.to_owned()).unwrap(),
        Body::Empty => String::new(),
    }
}

async fn call(store: &Arc<MemoryLogStore>, req: Request<Body>) -> Response<Body> {
    let handler = LogHandler::new(store.clone(), TimestampPolicy::CallerSupplied);
    function_handler(&handler, req).await.unwrap()
}

#[tokio::test]
async fn test_post_stores_log() {
    let store = Arc::new(MemoryLogStore::new());
    let body = json!({ "location": "Warehouse-A", "device_count": 12, "created_at": 1700000000 });
    let resp = call(&store, request(Method::POST, Body::Text(body.to_string()))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(text(&resp), "Success!");
    assert_eq!(resp.headers()["content-type"], "text/plain");
    assert_eq!(
        store.records(),
        vec![LogRecord::new(String::from("Warehouse-A"), 12, 1700000000).unwrap()]
    );
}

#[tokio::test]
async fn test_binary_body_accepted() {
    let store = Arc::new(MemoryLogStore::new());
    let body = json!({ "location": "building-1", "device_count": 200, "created_at": 1 });
    let resp = call(&store, request(Method::POST, Body::Binary(body.to_string().into_bytes()))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn test_missing_device_count() {
    let store = Arc::new(MemoryLogStore::new());
    let body = json!({ "location": "Warehouse-A" });
    let resp = call(&store, request(Method::POST, Body::Text(body.to_string()))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(&resp), "bad input");
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_empty_post() {
    let store = Arc::new(MemoryLogStore::new());
    let resp = call(&store, request(Method::POST, Body::Empty)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_store_failure() {
    let store = Arc::new(MemoryLogStore::failing());
    let body = json!({ "location": "Warehouse-A", "device_count": 12, "created_at": 1700000000 });
    let resp = call(&store, request(Method::POST, Body::Text(body.to_string()))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text(&resp), "unable to store log");
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_get_is_online() {
    let store = Arc::new(MemoryLogStore::new());
    let body = json!({ "location": "Warehouse-A", "device_count": 12, "created_at": 1700000000 });
    let resp = call(&store, request(Method::GET, Body::Text(body.to_string()))).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(text(&resp), "Function is online");
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_put_not_allowed_and_not_echoed() {
    let store = Arc::new(MemoryLogStore::new());
    let resp = call(&store, request(Method::PUT, Body::Text(String::from("echo this")))).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(text(&resp), "method not allowed");
    assert!(store.records().is_empty());
}
