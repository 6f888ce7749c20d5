use std::time::Duration;

use notificationapi_core::{Context, Result};
use notificationapi_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// The SDK has no timeout of its own: configure it on the reqwest client.
#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| notificationapi_core::Error::transport("failed to build client").with_source(e))?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let req = http::Request::builder()
        .method("GET")
        .uri("https://api.notificationapi.com")
        .body(bytes::Bytes::new())?;

    let resp = ctx.http_send(req).await?;
    println!("Response status: {}", resp.status());
    Ok(())
}
