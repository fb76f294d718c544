use std::env;
use std::sync::Arc;
use ark_core::{DynamoLogStore, LogHandler, LogStore, MemoryLogStore, StoreConfig, TimestampPolicy};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info};

const BIND_ADDR: &str = "BIND_ADDR";
const LOG_STORE: &str = "LOG_STORE";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("unknown LOG_STORE '{0}', expected 'dynamodb' or 'memory'")]
    UnknownStore(String),

    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Dynamo,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub store: StoreKind,
    pub dynamo: StoreConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<ServerConfig, ServerError> {
        let store = match env::var(LOG_STORE) {
            Ok(kind) => parse_store_kind(&kind)?,
            Err(_) => StoreKind::Dynamo
        };
        Ok(ServerConfig {
            bind_addr: env::var(BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            store,
            dynamo: StoreConfig::from_env(),
        })
    }
}

fn parse_store_kind(kind: &str) -> Result<StoreKind, ServerError> {
    match kind {
        "dynamodb" => Ok(StoreKind::Dynamo),
        "memory" => Ok(StoreKind::Memory),
        other => Err(ServerError::UnknownStore(other.to_string())),
    }
}

/// `/` and `/log` accept every method; the handler decides what is allowed.
pub fn router(handler: LogHandler) -> Router {
    Router::new()
        .route("/", any(dispatch))
        .route("/log", any(dispatch))
        .with_state(Arc::new(handler))
}

async fn dispatch(State(handler): State<Arc<LogHandler>>, method: Method, body: Bytes) -> Response {
    debug!("{} with {} byte body", method, body.len());
    let reply = handler.handle(method.as_str(), &body).await;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "text/plain")], reply.body).into_response()
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let store: Arc<dyn LogStore> = match config.store {
        StoreKind::Dynamo => {
            info!("logging to table {}", config.dynamo.table_name);
            Arc::new(DynamoLogStore::from_config(&config.dynamo).await)
        }
        StoreKind::Memory => {
            info!("logging to memory, records are lost on exit");
            Arc::new(MemoryLogStore::new())
        }
    };
    let handler = LogHandler::new(store, TimestampPolicy::CallerSupplied);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(handler)).await?;
    Ok(())
}

#[test]
fn test_parse_store_kind() {
    assert_eq!(parse_store_kind("dynamodb").unwrap(), StoreKind::Dynamo);
    assert_eq!(parse_store_kind("memory").unwrap(), StoreKind::Memory);
    assert!(matches!(parse_store_kind("mongo"), Err(ServerError::UnknownStore(k)) if k == "mongo"));
}
