use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a message dispatch.
pub struct SendResponse {
    pub batch_id: String,
    /// One entry per accepted message, in request order.
    pub messages: Vec<SendResponseMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponseMessage {
    pub uri: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A message header as returned by the listing and single-message endpoints.
///
/// Only `id` and `uri` are guaranteed; the remaining fields depend on the
/// message direction and state.
pub struct MessageHeader {
    pub id: String,
    pub uri: String,
    pub reference: Option<String>,
    pub status: Option<String>,
    pub last_status_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub received_at: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub read_by: Option<String>,
    pub message_type: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub summary: Option<String>,
    pub body_uri: Option<String>,
    pub direction: Option<String>,
    pub parts: Option<u32>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessagesResponse {
    pub start_index: u32,
    pub count: u32,
    pub total_count: u32,
    pub messages: Vec<MessageHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessagesResponse {
    pub start_index: u32,
    pub count: u32,
    pub total_count: u32,
    pub messages: Vec<MessageHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub uri: String,
    pub reference: String,
    pub label: Option<String>,
    pub address: Option<String>,
    pub account_type: Option<String>,
    pub messages_remaining: Option<u64>,
    /// Expiry as reported by the gateway, unparsed.
    pub expires_on: Option<String>,
    pub role: Option<String>,
    pub default_dial_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountsResponse {
    pub accounts: Vec<Account>,
}
