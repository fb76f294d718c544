use ark_core::LogHandler;
use lambda_http::{Body, Error, Request, Response};
use tracing::debug;

/// Function URL entry point. Every request is answered with a plain-text
/// body; only failures to build the response itself are returned as `Err`.
pub async fn function_handler(handler: &LogHandler, event: Request) -> Result<Response<Body>, Error> {
    debug!("{} {}", event.method(), event.uri());
    let body: &[u8] = match event.body() {
        Body::Text(s) => s.as_bytes(),
        Body::Binary(b) => b.as_slice(),
        Body::Empty => &[],
    };
    let reply = handler.handle(event.method().as_str(), body).await;
    let resp = Response::builder()
        .status(reply.status)
        .header("content-type", "text/plain")
        .body(reply.body.into())
        .map_err(Box::new)?;
    Ok(resp)
}
