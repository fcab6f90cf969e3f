//! Transport layer: XML wire-format details (serialization/deserialization).

mod accounts;
mod dispatch;
mod message_headers;
mod notification;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

use crate::domain::TimestampError;

pub use accounts::decode_accounts;
pub use dispatch::{decode_send_response, encode_send_request};
pub use message_headers::{
    decode_message_header, decode_received_messages, decode_sent_messages,
};
pub use notification::{
    decode_delivered_notification, decode_failed_notification, decode_received_notification,
};

/// Namespace every REST response document is qualified with.
pub const ESENDEX_NAMESPACE: &str = "http://api.esendex.com/ns/";

#[derive(Debug, thiserror::Error)]
/// A response or notification document could not be decoded.
///
/// Every variant names the document (root element) that failed.
pub enum DecodeError {
    #[error("invalid {document} document: {source}")]
    Xml {
        document: &'static str,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("malformed {document} document: {source}")]
    Syntax {
        document: &'static str,
        #[source]
        source: quick_xml::Error,
    },

    #[error("expected {document} document, found <{actual}>")]
    UnexpectedRoot {
        document: &'static str,
        actual: String,
    },

    #[error("{document} document is incomplete")]
    Truncated { document: &'static str },

    #[error("{document} document is missing <{field}>")]
    MissingField {
        document: &'static str,
        field: &'static str,
    },

    #[error("{document} document has namespace {actual:?}, expected {expected:?}")]
    UnexpectedNamespace {
        document: &'static str,
        expected: &'static str,
        actual: Option<String>,
    },

    #[error("{document} document has invalid {field}: {value:?}")]
    InvalidField {
        document: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("invalid {document} document: {source}")]
    Timestamp {
        document: &'static str,
        #[source]
        source: TimestampError,
    },
}

impl DecodeError {
    /// Root element of the document that failed to decode.
    pub fn document(&self) -> &'static str {
        match self {
            Self::Xml { document, .. }
            | Self::Syntax { document, .. }
            | Self::UnexpectedRoot { document, .. }
            | Self::Truncated { document }
            | Self::MissingField { document, .. }
            | Self::UnexpectedNamespace { document, .. }
            | Self::InvalidField { document, .. }
            | Self::Timestamp { document, .. } => document,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to encode {document} document: {source}")]
pub struct EncodeError {
    pub document: &'static str,
    #[source]
    pub source: quick_xml::SeError,
}

/// Decode a document whose root element must be named `document`.
fn from_xml<T: DeserializeOwned>(document: &'static str, xml: &str) -> Result<T, DecodeError> {
    check_root(document, xml)?;
    quick_xml::de::from_str(xml).map_err(|source| DecodeError::Xml { document, source })
}

fn check_root(document: &'static str, xml: &str) -> Result<(), DecodeError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start) | Event::Empty(start)) => {
                let actual = local_name(&start);
                if actual != document {
                    return Err(DecodeError::UnexpectedRoot { document, actual });
                }
                return Ok(());
            }
            Ok(Event::Eof) => return Err(DecodeError::Truncated { document }),
            Ok(_) => {}
            Err(source) => return Err(DecodeError::Syntax { document, source }),
        }
    }
}

fn local_name(start: &quick_xml::events::BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

/// Text of each child element of the root, exactly as written (entities unescaped,
/// whitespace kept). Nested grandchildren are skipped; a repeated child keeps its
/// last value. Reading stops at the end of the root element.
fn read_text_fields(
    document: &'static str,
    xml: &str,
) -> Result<HashMap<String, String>, DecodeError> {
    let syntax = |source: quick_xml::Error| DecodeError::Syntax { document, source };

    let mut reader = Reader::from_str(xml);
    let mut fields = HashMap::new();
    let mut depth = 0usize;
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event().map_err(syntax)? {
            Event::Start(start) => {
                match depth {
                    0 => {
                        let actual = local_name(&start);
                        if actual != document {
                            return Err(DecodeError::UnexpectedRoot { document, actual });
                        }
                    }
                    1 => current = Some((local_name(&start), String::new())),
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(start) => match depth {
                0 => {
                    let actual = local_name(&start);
                    if actual != document {
                        return Err(DecodeError::UnexpectedRoot { document, actual });
                    }
                    return Ok(fields);
                }
                1 => {
                    fields.insert(local_name(&start), String::new());
                }
                _ => {}
            },
            Event::Text(text) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&text.unescape().map_err(syntax)?);
                }
            }
            Event::CData(data) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match depth {
                    0 => return Ok(fields),
                    1 => {
                        if let Some((name, value)) = current.take() {
                            fields.insert(name, value);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => return Err(DecodeError::Truncated { document }),
            _ => {}
        }
    }
}

fn take_field(
    document: &'static str,
    fields: &mut HashMap<String, String>,
    field: &'static str,
) -> Result<String, DecodeError> {
    fields
        .remove(field)
        .ok_or(DecodeError::MissingField { document, field })
}

fn check_namespace(document: &'static str, actual: Option<String>) -> Result<(), DecodeError> {
    match actual.as_deref() {
        Some(ESENDEX_NAMESPACE) => Ok(()),
        _ => Err(DecodeError::UnexpectedNamespace {
            document,
            expected: ESENDEX_NAMESPACE,
            actual,
        }),
    }
}

/// Blank elements (`<readat/>`) are treated as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|it| !it.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(
    document: &'static str,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<T>, DecodeError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| DecodeError::InvalidField {
            document,
            field,
            value,
        })
}

fn parse_instant(
    document: &'static str,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(value.trim())
        .map(|it| Some(it.with_timezone(&Utc)))
        .map_err(|_| DecodeError::InvalidField {
            document,
            field,
            value,
        })
}
