use std::collections::HashMap;

use crate::domain::{
    DeliveredNotification, FailedNotification, NotificationTime, ReceivedNotification,
};
use crate::transport::{DecodeError, read_text_fields, take_field};

const RECEIVED_DOCUMENT: &str = "InboundMessage";
const DELIVERED_DOCUMENT: &str = "MessageDelivered";
const FAILED_DOCUMENT: &str = "MessageFailed";

// Notification text is read verbatim: padding around `OccurredAt` is an
// error and `MessageText` keeps its whitespace.
struct Fields {
    document: &'static str,
    values: HashMap<String, String>,
}

impl Fields {
    fn read(document: &'static str, xml: &str) -> Result<Self, DecodeError> {
        let values = read_text_fields(document, xml)?;
        Ok(Self { document, values })
    }

    fn take(&mut self, field: &'static str) -> Result<String, DecodeError> {
        take_field(self.document, &mut self.values, field)
    }
}

/// Shared shape of `MessageDelivered` and `MessageFailed`.
struct MessageEvent {
    id: String,
    message_id: String,
    account_id: String,
    occurred_at: NotificationTime,
}

pub fn decode_received_notification(xml: &str) -> Result<ReceivedNotification, DecodeError> {
    let mut fields = Fields::read(RECEIVED_DOCUMENT, xml)?;
    Ok(ReceivedNotification {
        id: fields.take("Id")?,
        message_id: fields.take("MessageId")?,
        account_id: fields.take("AccountId")?,
        message_text: fields.take("MessageText")?,
        from: fields.take("From")?,
        to: fields.take("To")?,
    })
}

pub fn decode_delivered_notification(xml: &str) -> Result<DeliveredNotification, DecodeError> {
    let event = decode_message_event(DELIVERED_DOCUMENT, xml)?;
    Ok(DeliveredNotification {
        id: event.id,
        message_id: event.message_id,
        account_id: event.account_id,
        occurred_at: event.occurred_at,
    })
}

pub fn decode_failed_notification(xml: &str) -> Result<FailedNotification, DecodeError> {
    let event = decode_message_event(FAILED_DOCUMENT, xml)?;
    Ok(FailedNotification {
        id: event.id,
        message_id: event.message_id,
        account_id: event.account_id,
        occurred_at: event.occurred_at,
    })
}

fn decode_message_event(document: &'static str, xml: &str) -> Result<MessageEvent, DecodeError> {
    let mut fields = Fields::read(document, xml)?;
    let id = fields.take("Id")?;
    let message_id = fields.take("MessageId")?;
    let account_id = fields.take("AccountId")?;
    let occurred_at = NotificationTime::parse(&fields.take("OccurredAt")?)
        .map_err(|source| DecodeError::Timestamp { document, source })?;

    Ok(MessageEvent {
        id,
        message_id,
        account_id,
        occurred_at,
    })
}
