#[path = "env.rs"]
mod env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env::init_tracing();

    let client = env::client()?;
    let id = env::required("ESENDEX_MESSAGE_ID")?;

    let header = client.message(&id).await?;
    println!("{header:#?}");

    Ok(())
}
