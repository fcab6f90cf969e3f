use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};

const NOTIFICATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Byte layout of `YYYY-MM-DDThh:mm:ss`; `d` marks an ASCII digit.
const NOTIFICATION_TIME_SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid notification time {input:?}: expected YYYY-MM-DDThh:mm:ss")]
pub struct TimestampError {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Instant carried by push notifications (`OccurredAt`).
///
/// On the wire this is `YYYY-MM-DDThh:mm:ss` with no offset; it is always UTC.
pub struct NotificationTime(DateTime<Utc>);

impl NotificationTime {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse the exact wire pattern. No other formats are accepted.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        let err = || TimestampError {
            input: input.to_owned(),
        };

        let bytes = input.as_bytes();
        if bytes.len() != NOTIFICATION_TIME_SHAPE.len() {
            return Err(err());
        }
        let shape_ok = bytes
            .iter()
            .zip(NOTIFICATION_TIME_SHAPE)
            .all(|(&b, &expected)| match expected {
                b'd' => b.is_ascii_digit(),
                sep => b == sep,
            });
        if !shape_ok {
            return Err(err());
        }

        let naive = NaiveDateTime::parse_from_str(input, NOTIFICATION_TIME_FORMAT)
            .map_err(|_| err())?;
        Ok(Self(naive.and_utc()))
    }

    /// Render in the wire pattern. Sub-second precision is dropped.
    pub fn format(&self) -> String {
        self.0.format(NOTIFICATION_TIME_FORMAT).to_string()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for NotificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(NOTIFICATION_TIME_FORMAT))
    }
}

impl FromStr for NotificationTime {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DateTime<Utc>> for NotificationTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<NotificationTime> for DateTime<Utc> {
    fn from(value: NotificationTime) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An inbound SMS pushed by the gateway (`InboundMessage`).
pub struct ReceivedNotification {
    pub id: String,
    pub message_id: String,
    pub account_id: String,
    pub message_text: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Delivery confirmation pushed by the gateway (`MessageDelivered`).
pub struct DeliveredNotification {
    pub id: String,
    pub message_id: String,
    pub account_id: String,
    pub occurred_at: NotificationTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Delivery failure pushed by the gateway (`MessageFailed`).
pub struct FailedNotification {
    pub id: String,
    pub message_id: String,
    pub account_id: String,
    pub occurred_at: NotificationTime,
}
