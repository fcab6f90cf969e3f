use esendex::{AccountReference, Message, Messages};

#[path = "env.rs"]
mod env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env::init_tracing();

    let client = env::client()?;
    let account = AccountReference::new(env::required("ESENDEX_ACCOUNT")?)?;
    let to = env::required("ESENDEX_TO")?;
    let body = env::optional("ESENDEX_BODY")
        .unwrap_or_else(|| "Hello from the esendex demo.".to_owned());

    let messages = Messages::one(Message::new(to, body)?);
    let response = client.account(account).send(messages).await?;

    println!("batch: {}", response.batch_id);
    for message in &response.messages {
        println!("  {} {}", message.id, message.uri);
    }

    Ok(())
}
