//! Push notification endpoints.
//!
//! Each constructor returns an axum [`MethodRouter`] accepting `POST`, to be mounted
//! wherever the host application configured the Esendex push URL:
//!
//! ```rust,no_run
//! use axum::Router;
//! use esendex::webhook;
//!
//! let app: Router = Router::new()
//!     .route("/esendex/received", webhook::received(|n: esendex::ReceivedNotification| {
//!         println!("{} says {}", n.from, n.message_text);
//!     }))
//!     .route("/esendex/delivered", webhook::delivered(|n: esendex::DeliveredNotification| {
//!         println!("{} delivered at {}", n.message_id, n.occurred_at);
//!     }));
//! ```
//!
//! A body that does not decode gets `500` and the consumer is not called. A decoded
//! notification is handed to the consumer synchronously and answered with `200`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, post};

use crate::domain::{DeliveredNotification, FailedNotification, ReceivedNotification};
use crate::transport::DecodeError;

/// Receives inbound messages (`InboundMessage`).
pub trait ReceivedConsumer: Send + Sync + 'static {
    fn received(&self, notification: ReceivedNotification);
}

/// Receives delivery confirmations (`MessageDelivered`).
pub trait DeliveredConsumer: Send + Sync + 'static {
    fn delivered(&self, notification: DeliveredNotification);
}

/// Receives delivery failures (`MessageFailed`).
pub trait FailedConsumer: Send + Sync + 'static {
    fn failed(&self, notification: FailedNotification);
}

impl<F> ReceivedConsumer for F
where
    F: Fn(ReceivedNotification) + Send + Sync + 'static,
{
    fn received(&self, notification: ReceivedNotification) {
        self(notification)
    }
}

impl<F> DeliveredConsumer for F
where
    F: Fn(DeliveredNotification) + Send + Sync + 'static,
{
    fn delivered(&self, notification: DeliveredNotification) {
        self(notification)
    }
}

impl<F> FailedConsumer for F
where
    F: Fn(FailedNotification) + Send + Sync + 'static,
{
    fn failed(&self, notification: FailedNotification) {
        self(notification)
    }
}

/// Endpoint for inbound message notifications.
pub fn received<S>(consumer: impl ReceivedConsumer) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let consumer = Arc::new(consumer);
    post(move |body: Bytes| async move {
        dispatch(&body, crate::transport::decode_received_notification, |n| {
            consumer.received(n)
        })
    })
}

/// Endpoint for delivery confirmations.
pub fn delivered<S>(consumer: impl DeliveredConsumer) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let consumer = Arc::new(consumer);
    post(move |body: Bytes| async move {
        dispatch(&body, crate::transport::decode_delivered_notification, |n| {
            consumer.delivered(n)
        })
    })
}

/// Endpoint for delivery failures.
pub fn failed<S>(consumer: impl FailedConsumer) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let consumer = Arc::new(consumer);
    post(move |body: Bytes| async move {
        dispatch(&body, crate::transport::decode_failed_notification, |n| {
            consumer.failed(n)
        })
    })
}

fn dispatch<T>(
    body: &[u8],
    decode: fn(&str) -> Result<T, DecodeError>,
    consume: impl FnOnce(T),
) -> StatusCode {
    let Ok(xml) = std::str::from_utf8(body) else {
        return StatusCode::INTERNAL_SERVER_ERROR;
    };
    match decode(xml) {
        Ok(notification) => {
            consume(notification);
            StatusCode::OK
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
