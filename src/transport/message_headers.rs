use serde::Deserialize;

use crate::domain::{MessageHeader, ReceivedMessagesResponse, SentMessagesResponse};
use crate::transport::{
    DecodeError, check_namespace, from_xml, non_blank, parse_instant, parse_number,
};

const LIST_DOCUMENT: &str = "messageheaders";
const SINGLE_DOCUMENT: &str = "messageheader";

#[derive(Debug, Deserialize)]
struct MessageHeadersXml {
    #[serde(rename = "@xmlns", default)]
    xmlns: Option<String>,
    #[serde(rename = "@startindex")]
    start_index: u32,
    #[serde(rename = "@count")]
    count: u32,
    #[serde(rename = "@totalcount")]
    total_count: u32,
    #[serde(rename = "messageheader", default)]
    headers: Vec<MessageHeaderXml>,
}

#[derive(Debug, Deserialize)]
struct MessageHeaderXml {
    #[serde(rename = "@xmlns", default)]
    xmlns: Option<String>,
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@uri")]
    uri: String,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    laststatusat: Option<String>,
    #[serde(default)]
    submittedat: Option<String>,
    #[serde(default)]
    receivedat: Option<String>,
    #[serde(default)]
    sentat: Option<String>,
    #[serde(default)]
    deliveredat: Option<String>,
    #[serde(default)]
    readat: Option<String>,
    #[serde(default)]
    readby: Option<String>,
    #[serde(rename = "type", default)]
    message_type: Option<String>,
    #[serde(default)]
    to: Option<PhoneNumberXml>,
    #[serde(default)]
    from: Option<PhoneNumberXml>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    body: Option<LinkXml>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    parts: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhoneNumberXml {
    #[serde(default)]
    phonenumber: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinkXml {
    #[serde(rename = "@uri", default)]
    uri: Option<String>,
}

struct MessageHeadersPage {
    start_index: u32,
    count: u32,
    total_count: u32,
    messages: Vec<MessageHeader>,
}

pub fn decode_sent_messages(xml: &str) -> Result<SentMessagesResponse, DecodeError> {
    let page = decode_page(xml)?;
    Ok(SentMessagesResponse {
        start_index: page.start_index,
        count: page.count,
        total_count: page.total_count,
        messages: page.messages,
    })
}

pub fn decode_received_messages(xml: &str) -> Result<ReceivedMessagesResponse, DecodeError> {
    let page = decode_page(xml)?;
    Ok(ReceivedMessagesResponse {
        start_index: page.start_index,
        count: page.count,
        total_count: page.total_count,
        messages: page.messages,
    })
}

pub fn decode_message_header(xml: &str) -> Result<MessageHeader, DecodeError> {
    let mut parsed: MessageHeaderXml = from_xml(SINGLE_DOCUMENT, xml)?;
    check_namespace(SINGLE_DOCUMENT, parsed.xmlns.take())?;
    into_header(SINGLE_DOCUMENT, parsed)
}

fn decode_page(xml: &str) -> Result<MessageHeadersPage, DecodeError> {
    let parsed: MessageHeadersXml = from_xml(LIST_DOCUMENT, xml)?;
    check_namespace(LIST_DOCUMENT, parsed.xmlns)?;

    let messages = parsed
        .headers
        .into_iter()
        .map(|header| into_header(LIST_DOCUMENT, header))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MessageHeadersPage {
        start_index: parsed.start_index,
        count: parsed.count,
        total_count: parsed.total_count,
        messages,
    })
}

fn into_header(
    document: &'static str,
    header: MessageHeaderXml,
) -> Result<MessageHeader, DecodeError> {
    Ok(MessageHeader {
        id: header.id,
        uri: header.uri,
        reference: non_blank(header.reference),
        status: non_blank(header.status),
        last_status_at: parse_instant(document, "laststatusat", header.laststatusat)?,
        submitted_at: parse_instant(document, "submittedat", header.submittedat)?,
        received_at: parse_instant(document, "receivedat", header.receivedat)?,
        sent_at: parse_instant(document, "sentat", header.sentat)?,
        delivered_at: parse_instant(document, "deliveredat", header.deliveredat)?,
        read_at: parse_instant(document, "readat", header.readat)?,
        read_by: non_blank(header.readby),
        message_type: non_blank(header.message_type),
        to: non_blank(header.to.and_then(|it| it.phonenumber)),
        from: non_blank(header.from.and_then(|it| it.phonenumber)),
        summary: non_blank(header.summary),
        body_uri: non_blank(header.body.and_then(|it| it.uri)),
        direction: non_blank(header.direction),
        parts: parse_number(document, "parts", header.parts)?,
        username: non_blank(header.username),
    })
}
