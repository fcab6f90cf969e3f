use esendex::AccountReference;

#[path = "env.rs"]
mod env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env::init_tracing();

    let client = env::client()?;
    let options = env::page_options()?;

    let response = match env::optional("ESENDEX_ACCOUNT") {
        Some(reference) => {
            client
                .account(AccountReference::new(reference)?)
                .received(options)
                .await?
        }
        None => client.received(options).await?,
    };

    println!(
        "showing {} from {} of {}",
        response.count, response.start_index, response.total_count
    );
    println!("{:#?}", response.messages);

    Ok(())
}
