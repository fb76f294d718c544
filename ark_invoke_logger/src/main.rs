use std::env;
use std::sync::Arc;
use ark_core::{DynamoLogStore, LogHandler, StoreConfig, TimestampPolicy};
use ark_invoke_logger::function_handler;
use lambda_runtime::{run, service_fn, Error};

const TRACE_DEBUG: &str = "TRACE_DEBUG";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let tracing_result = env::var(TRACE_DEBUG);
    tracing_subscriber::fmt()
        .with_max_level(if let Ok(_) = tracing_result {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let store = DynamoLogStore::from_config(&StoreConfig::from_env()).await;
    let handler = LogHandler::new(Arc::new(store), TimestampPolicy::ServerClock);

    run(service_fn(|event| function_handler(&handler, event))).await
}
