use ark_core::{LogHandler, LogRequest};
use lambda_runtime::{Error, LambdaEvent};
use tracing::debug;

/// Direct invocation entry point. The runtime provides the envelope, so the
/// outcome is only `Ok` or the error that stopped the write.
pub async fn function_handler(handler: &LogHandler, event: LambdaEvent<LogRequest>) -> Result<(), Error> {
    debug!("invocation {}: {:?}", event.context.request_id, event.payload);
    handler.record(event.payload).await?;
    Ok(())
}
