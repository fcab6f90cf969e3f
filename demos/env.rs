//! Environment lookups shared by the demo binaries.
#![allow(dead_code)]

use std::io;

use esendex::{Client, Credentials, ListOptions, Page};

const PAGE_SIZE: u32 = 20;

pub fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

pub fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|it| !it.trim().is_empty())
}

/// Client from `ESENDEX_USERNAME` / `ESENDEX_PASSWORD`.
pub fn client() -> Result<Client, Box<dyn std::error::Error>> {
    let username = required("ESENDEX_USERNAME")?;
    let password = required("ESENDEX_PASSWORD")?;
    Ok(Client::new(Credentials::new(username, password)?))
}

/// Page window from the 1-based `ESENDEX_PAGE` (default 1).
pub fn page_options() -> Result<ListOptions, Box<dyn std::error::Error>> {
    let page: u32 = match optional("ESENDEX_PAGE") {
        Some(raw) => raw.trim().parse()?,
        None => 1,
    };
    let start_index = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    Ok(ListOptions::new().with(Page::new(start_index, PAGE_SIZE)))
}

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("esendex=debug,info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
