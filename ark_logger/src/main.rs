use std::sync::Arc;
use ark_core::{DynamoLogStore, LogHandler, StoreConfig, TimestampPolicy};
use ark_logger::function_handler;
use lambda_http::{run, service_fn, Error};
use tracing::info;

const TRACE_DEBUG: &str = "TRACE_DEBUG";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(match std::env::var(TRACE_DEBUG) {
            Ok(_) => tracing::Level::DEBUG,
            Err(_) => tracing::Level::INFO
        })
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let config = StoreConfig::from_env();
    info!("logging to table {}", config.table_name);
    let store = DynamoLogStore::from_config(&config).await;
    let handler = LogHandler::new(Arc::new(store), TimestampPolicy::CallerSupplied);

    run(service_fn(|event| function_handler(&handler, event))).await
}
