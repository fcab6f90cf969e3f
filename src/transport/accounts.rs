use serde::Deserialize;

use crate::domain::{Account, AccountsResponse};
use crate::transport::{DecodeError, check_namespace, from_xml, non_blank, parse_number};

const DOCUMENT: &str = "accounts";

#[derive(Debug, Deserialize)]
struct AccountsXml {
    #[serde(rename = "@xmlns", default)]
    xmlns: Option<String>,
    #[serde(rename = "account", default)]
    accounts: Vec<AccountXml>,
}

#[derive(Debug, Deserialize)]
struct AccountXml {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@uri")]
    uri: String,
    reference: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(rename = "type", default)]
    account_type: Option<String>,
    #[serde(default)]
    messagesremaining: Option<String>,
    #[serde(default)]
    expireson: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    defaultdialcode: Option<String>,
}

pub fn decode_accounts(xml: &str) -> Result<AccountsResponse, DecodeError> {
    let parsed: AccountsXml = from_xml(DOCUMENT, xml)?;
    check_namespace(DOCUMENT, parsed.xmlns)?;

    let accounts = parsed
        .accounts
        .into_iter()
        .map(|account| {
            Ok(Account {
                id: account.id,
                uri: account.uri,
                reference: account.reference,
                label: non_blank(account.label),
                address: non_blank(account.address),
                account_type: non_blank(account.account_type),
                messages_remaining: parse_number(
                    DOCUMENT,
                    "messagesremaining",
                    account.messagesremaining,
                )?,
                expires_on: non_blank(account.expireson),
                role: non_blank(account.role),
                default_dial_code: non_blank(account.defaultdialcode),
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    Ok(AccountsResponse { accounts })
}
