use notificationapi::{Client, Config, SendRequest, User};
use notificationapi_core::{Context, OsEnv};
use notificationapi_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> notificationapi::Result<()> {
    env_logger::init();

    // Credentials are read from NOTIFICATIONAPI_CLIENT_ID / NOTIFICATIONAPI_CLIENT_SECRET.
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let client = Client::new(ctx.clone(), Config::new().from_env(&ctx))?;

    let user = User::new("user-1")
        .with_email("user@example.com")
        .with_number("+15005550006");
    let resp = client
        .send(&SendRequest::new("order_shipped", user))
        .await?;

    println!("status: {}", resp.status());
    println!("body: {}", String::from_utf8_lossy(resp.body()));
    Ok(())
}
