#[path = "env.rs"]
mod env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env::init_tracing();

    let client = env::client()?;
    let response = client.accounts().await?;

    for account in &response.accounts {
        println!(
            "{} {} remaining: {:?}",
            account.reference,
            account.label.as_deref().unwrap_or("-"),
            account.messages_remaining
        );
    }

    Ok(())
}
