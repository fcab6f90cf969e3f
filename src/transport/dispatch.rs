use serde::{Deserialize, Serialize};

use crate::domain::{AccountReference, Messages, SendResponse, SendResponseMessage};
use crate::transport::{DecodeError, EncodeError, check_namespace, from_xml};

const REQUEST_DOCUMENT: &str = "messages";
const RESPONSE_DOCUMENT: &str = "messageheaders";

#[derive(Debug, Serialize)]
#[serde(rename = "messages")]
struct MessageDispatchRequest<'a> {
    accountreference: &'a str,
    message: Vec<MessageDispatchRequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct MessageDispatchRequestMessage<'a> {
    to: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessageDispatchResponse {
    #[serde(rename = "@xmlns", default)]
    xmlns: Option<String>,
    #[serde(rename = "@batchid")]
    batch_id: String,
    #[serde(rename = "messageheader", default)]
    headers: Vec<MessageDispatchResponseHeader>,
}

#[derive(Debug, Deserialize)]
struct MessageDispatchResponseHeader {
    #[serde(rename = "@uri")]
    uri: String,
    #[serde(rename = "@id")]
    id: String,
}

pub fn encode_send_request(
    reference: &AccountReference,
    messages: &Messages,
) -> Result<String, EncodeError> {
    let body = MessageDispatchRequest {
        accountreference: reference.as_str(),
        message: messages
            .iter()
            .map(|message| MessageDispatchRequestMessage {
                to: message.to(),
                body: message.body(),
            })
            .collect(),
    };

    quick_xml::se::to_string(&body).map_err(|source| EncodeError {
        document: REQUEST_DOCUMENT,
        source,
    })
}

pub fn decode_send_response(xml: &str) -> Result<SendResponse, DecodeError> {
    let parsed: MessageDispatchResponse = from_xml(RESPONSE_DOCUMENT, xml)?;
    check_namespace(RESPONSE_DOCUMENT, parsed.xmlns)?;

    Ok(SendResponse {
        batch_id: parsed.batch_id,
        messages: parsed
            .headers
            .into_iter()
            .map(|header| SendResponseMessage {
                uri: header.uri,
                id: header.id,
            })
            .collect(),
    })
}
