//! Typed Rust client and push-notification decoder for the Esendex SMS REST API.
//!
//! The crate has a domain layer of strong types, a transport layer for the XML
//! wire format, a client layer orchestrating authenticated requests, and a
//! [`webhook`] module with axum endpoints for push notifications.
//!
//! ```rust,no_run
//! use esendex::{AccountReference, Client, Credentials, ListOptions, Message, Messages, Page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), esendex::EsendexError> {
//!     let client = Client::new(Credentials::new("user@example.com", "...")?);
//!     let recent = client.sent(ListOptions::new().with(Page::new(0, 20))).await?;
//!     println!("{} sent messages", recent.total_count);
//!
//!     let account = client.account(AccountReference::new("EX0123456")?);
//!     let batch = Messages::one(Message::new("447700900123", "hello")?);
//!     let _resp = account.send(batch).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod options;
mod transport;
pub mod webhook;

pub use client::{AccountClient, Client, ClientBuilder, EsendexError};
pub use domain::{
    Account, AccountReference, AccountsResponse, Credentials, DeliveredNotification,
    FailedNotification, Message, MessageHeader, Messages, NotificationTime, Password,
    ReceivedMessagesResponse, ReceivedNotification, SendResponse, SendResponseMessage,
    SentMessagesResponse, TimestampError, Username, ValidationError,
};
pub use options::{ListOption, ListOptions, Page};
pub use transport::{DecodeError, ESENDEX_NAMESPACE, EncodeError};
pub use webhook::{DeliveredConsumer, FailedConsumer, ReceivedConsumer};
