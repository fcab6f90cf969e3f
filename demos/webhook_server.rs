use axum::Router;
use esendex::{DeliveredNotification, FailedNotification, ReceivedNotification, webhook};
use tokio::net::TcpListener;

#[path = "env.rs"]
mod env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env::init_tracing();

    let addr = env::optional("ESENDEX_WEBHOOK_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_owned());

    let app = Router::new()
        .route(
            "/received",
            webhook::received(|n: ReceivedNotification| {
                tracing::info!(id = %n.id, from = %n.from, to = %n.to, text = %n.message_text, "message received");
            }),
        )
        .route(
            "/delivered",
            webhook::delivered(|n: DeliveredNotification| {
                tracing::info!(message_id = %n.message_id, occurred_at = %n.occurred_at, "message delivered");
            }),
        )
        .route(
            "/failed",
            webhook::failed(|n: FailedNotification| {
                tracing::warn!(message_id = %n.message_id, occurred_at = %n.occurred_at, "message failed");
            }),
        );

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening for esendex push notifications");
    axum::serve(listener, app).await?;

    Ok(())
}
