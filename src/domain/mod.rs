//! Domain layer: strong types with validation and invariants (no I/O).

mod notification;
mod response;
mod validation;
mod value;

pub use notification::{
    DeliveredNotification, FailedNotification, NotificationTime, ReceivedNotification,
    TimestampError,
};
pub use response::{
    Account, AccountsResponse, MessageHeader, ReceivedMessagesResponse, SendResponse,
    SendResponseMessage, SentMessagesResponse,
};
pub use validation::ValidationError;
pub use value::{AccountReference, Credentials, Message, Messages, Password, Username};
