//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::domain::{
    AccountReference, AccountsResponse, Credentials, MessageHeader, Messages,
    ReceivedMessagesResponse, SendResponse, SentMessagesResponse, ValidationError,
};
use crate::options::ListOptions;
use crate::transport::{DecodeError, EncodeError};

const DEFAULT_BASE_URL: &str = "https://api.esendex.com";
const XML_CONTENT_TYPE: &str = "application/xml";
const MESSAGE_ID_FIELD: &str = "id";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        credentials: &'a Credentials,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        credentials: &'a Credentials,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self
                .client
                .request(method, request.url)
                .basic_auth(
                    credentials.username().as_str(),
                    Some(credentials.password().as_str()),
                )
                .header(ACCEPT, XML_CONTENT_TYPE);
            if let Some(body) = request.body {
                builder = builder.header(CONTENT_TYPE, XML_CONTENT_TYPE).body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Client`] and [`AccountClient`].
///
/// Each failure class has its own variant:
/// - invalid input or configuration ([`EsendexError::Precondition`]),
/// - connection / I/O failures ([`EsendexError::Transport`]),
/// - non-2xx responses ([`EsendexError::Gateway`]),
/// - response bodies that do not match the expected XML ([`EsendexError::Decode`]).
pub enum EsendexError {
    /// One of the domain constructors rejected an invalid value, or the client is
    /// misconfigured.
    #[error("precondition failed: {0}")]
    Precondition(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the gateway.
    ///
    /// The body is kept verbatim for inspection and is never parsed.
    #[error("unexpected HTTP status: {status}")]
    Gateway { status: u16, body: Option<String> },

    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

#[derive(Debug, Clone)]
/// Builder for [`Client`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway base URL (default `https://api.esendex.com`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`Client`].
    pub fn build(self) -> Result<Client, EsendexError> {
        parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| EsendexError::Transport(Box::new(err)))?;

        Ok(Client {
            credentials: self.credentials,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Esendex client not bound to an account.
///
/// Listing operations see every account visible to the credentials. Use
/// [`Client::account`] to obtain an [`AccountClient`], which can also send.
pub struct Client {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`Client::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> ClientBuilder {
        ClientBuilder::new(credentials)
    }

    /// Derive a client bound to `reference`. `self` is left untouched.
    pub fn account(&self, reference: AccountReference) -> AccountClient {
        AccountClient {
            client: self.clone(),
            reference,
        }
    }

    /// List received messages across all accounts (`GET /v1.0/inbox/messages`).
    pub async fn received(
        &self,
        options: ListOptions,
    ) -> Result<ReceivedMessagesResponse, EsendexError> {
        let body = self.get(&["v1.0", "inbox", "messages"], &options).await?;
        Ok(crate::transport::decode_received_messages(&body)?)
    }

    /// List sent messages across all accounts (`GET /v1.0/messageheaders`).
    pub async fn sent(&self, options: ListOptions) -> Result<SentMessagesResponse, EsendexError> {
        let body = self.get(&["v1.0", "messageheaders"], &options).await?;
        Ok(crate::transport::decode_sent_messages(&body)?)
    }

    /// Fetch a single message header (`GET /v1.1/messageheaders/{id}`).
    pub async fn message(&self, id: &str) -> Result<MessageHeader, EsendexError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::Empty {
                field: MESSAGE_ID_FIELD,
            }
            .into());
        }

        let body = self
            .get(&["v1.1", "messageheaders", id], &ListOptions::default())
            .await?;
        Ok(crate::transport::decode_message_header(&body)?)
    }

    /// List the accounts visible to the credentials (`GET /v1.0/accounts`).
    pub async fn accounts(&self) -> Result<AccountsResponse, EsendexError> {
        let body = self
            .get(&["v1.0", "accounts"], &ListOptions::default())
            .await?;
        Ok(crate::transport::decode_accounts(&body)?)
    }

    async fn get(&self, path: &[&str], query: &ListOptions) -> Result<String, EsendexError> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: self.url(path, query)?,
            body: None,
        };
        self.execute(request).await
    }

    async fn post(&self, path: &[&str], body: String) -> Result<String, EsendexError> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.url(path, &ListOptions::default())?,
            body: Some(body),
        };
        self.execute(request).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<String, EsendexError> {
        tracing::debug!(method = ?request.method, url = %request.url, "sending esendex request");

        let response = self
            .http
            .send(&self.credentials, request)
            .await
            .map_err(EsendexError::Transport)?;

        if !(200..=299).contains(&response.status) {
            tracing::debug!(status = response.status, "esendex request failed");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(EsendexError::Gateway {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }

    fn url(&self, path: &[&str], query: &ListOptions) -> Result<Url, EsendexError> {
        let mut url = parse_base_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| ValidationError::InvalidUrl {
                input: self.base_url.clone(),
            })?
            .pop_if_empty()
            .extend(path);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.params());
        }
        Ok(url)
    }
}

#[derive(Clone, Debug)]
/// Esendex client bound to a single account.
///
/// Obtained from [`Client::account`]. Sending is only possible through this type.
pub struct AccountClient {
    client: Client,
    reference: AccountReference,
}

impl AccountClient {
    pub fn reference(&self) -> &AccountReference {
        &self.reference
    }

    /// Dispatch `messages` from this account (`POST /v1.0/messagedispatcher`).
    ///
    /// The returned headers are in the same order as `messages`.
    pub async fn send(&self, messages: Messages) -> Result<SendResponse, EsendexError> {
        let body = crate::transport::encode_send_request(&self.reference, &messages)?;
        let body = self
            .client
            .post(&["v1.0", "messagedispatcher"], body)
            .await?;
        Ok(crate::transport::decode_send_response(&body)?)
    }

    /// List received messages for this account (`GET /v1.0/inbox/{reference}/messages`).
    pub async fn received(
        &self,
        options: ListOptions,
    ) -> Result<ReceivedMessagesResponse, EsendexError> {
        let body = self
            .client
            .get(
                &["v1.0", "inbox", self.reference.as_str(), "messages"],
                &options,
            )
            .await?;
        Ok(crate::transport::decode_received_messages(&body)?)
    }

    /// List messages sent from this account (`GET /v1.0/messageheaders?accountreference=…`).
    pub async fn sent(&self, options: ListOptions) -> Result<SentMessagesResponse, EsendexError> {
        let mut query = options;
        query.set(AccountReference::FIELD, self.reference.as_str());
        let body = self.client.get(&["v1.0", "messageheaders"], &query).await?;
        Ok(crate::transport::decode_sent_messages(&body)?)
    }

    /// See [`Client::message`].
    pub async fn message(&self, id: &str) -> Result<MessageHeader, EsendexError> {
        self.client.message(id).await
    }

    /// See [`Client::accounts`].
    pub async fn accounts(&self) -> Result<AccountsResponse, EsendexError> {
        self.client.accounts().await
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::InvalidUrl {
        input: base_url.to_owned(),
    };
    let url = Url::parse(base_url).map_err(|_| invalid())?;
    if url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::Message;
    use crate::options::Page;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<RecordedRequest>,
        response_status: u16,
        response_body: String,
    }

    #[derive(Debug, Clone)]
    struct RecordedRequest {
        method: HttpMethod,
        url: String,
        username: String,
        password: String,
        body: Option<String>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn requests(&self) -> Vec<RecordedRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        fn last_request(&self) -> RecordedRequest {
            self.requests().pop().expect("no request recorded")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            credentials: &'a Credentials,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest {
                    method: request.method,
                    url: request.url.to_string(),
                    username: credentials.username().as_str().to_owned(),
                    password: credentials.password().as_str().to_owned(),
                    body: request.body,
                });
                Ok(HttpResponse {
                    status: state.response_status,
                    body: state.response_body.clone(),
                })
            })
        }
    }

    struct FailingTransport;

    impl HttpTransport for FailingTransport {
        fn send<'a>(
            &'a self,
            _credentials: &'a Credentials,
            _request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let err: Box<dyn StdError + Send + Sync> = Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ));
                Err::<HttpResponse, _>(err)
            })
        }
    }

    const EMPTY_PAGE: &str = r#"<messageheaders startindex="0" count="0" totalcount="0" xmlns="http://api.esendex.com/ns/"/>"#;

    fn make_client(transport: impl HttpTransport + 'static) -> Client {
        Client {
            credentials: Credentials::new("user@example.com", "secret").unwrap(),
            base_url: "https://example.invalid".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn reference() -> AccountReference {
        AccountReference::new("EX0123456").unwrap()
    }

    #[tokio::test]
    async fn send_posts_dispatch_document_and_decodes_response() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<messageheaders batchid="B1" xmlns="http://api.esendex.com/ns/">
  <messageheader uri="u1" id="m1"/>
</messageheaders>"#;
        let transport = FakeTransport::new(200, xml);
        let client = make_client(transport.clone()).account(reference());

        let messages = Messages::one(Message::new("447700900123", "hi").unwrap());
        let response = client.send(messages).await.unwrap();
        assert_eq!(
            response,
            SendResponse {
                batch_id: "B1".to_owned(),
                messages: vec![crate::domain::SendResponseMessage {
                    uri: "u1".to_owned(),
                    id: "m1".to_owned(),
                }],
            }
        );

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.invalid/v1.0/messagedispatcher");
        assert_eq!(request.username, "user@example.com");
        assert_eq!(request.password, "secret");
        assert_eq!(
            request.body.as_deref(),
            Some(
                "<messages><accountreference>EX0123456</accountreference>\
                 <message><to>447700900123</to><body>hi</body></message></messages>"
            )
        );
    }

    #[tokio::test]
    async fn send_response_order_matches_request_order() {
        let xml = r#"<messageheaders batchid="B2" xmlns="http://api.esendex.com/ns/">
  <messageheader uri="u/1" id="1"/>
  <messageheader uri="u/2" id="2"/>
  <messageheader uri="u/3" id="3"/>
</messageheaders>"#;
        let transport = FakeTransport::new(200, xml);
        let client = make_client(transport.clone()).account(reference());

        let messages = Messages::new(
            ["447700900001", "447700900002", "447700900003"]
                .into_iter()
                .map(|to| Message::new(to, format!("to {to}")).unwrap())
                .collect(),
        )
        .unwrap();
        let response = client.send(messages.clone()).await.unwrap();

        assert_eq!(response.messages.len(), messages.len());
        let ids: Vec<_> = response.messages.iter().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);

        let body = transport.last_request().body.unwrap();
        let positions: Vec<_> = messages
            .iter()
            .map(|message| body.find(message.to()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{body}");
    }

    #[tokio::test]
    async fn scoping_does_not_change_root_client() {
        let transport = FakeTransport::new(200, EMPTY_PAGE);
        let root = make_client(transport.clone());
        let scoped = root.account(reference());

        scoped.sent(ListOptions::default()).await.unwrap();
        root.sent(ListOptions::default()).await.unwrap();
        scoped.received(ListOptions::default()).await.unwrap();
        root.received(ListOptions::default()).await.unwrap();

        let urls: Vec<_> = transport.requests().into_iter().map(|it| it.url).collect();
        assert_eq!(
            urls,
            [
                "https://example.invalid/v1.0/messageheaders?accountreference=EX0123456",
                "https://example.invalid/v1.0/messageheaders",
                "https://example.invalid/v1.0/inbox/EX0123456/messages",
                "https://example.invalid/v1.0/inbox/messages",
            ]
        );
        assert_eq!(scoped.reference().as_str(), "EX0123456");
    }

    #[tokio::test]
    async fn listing_applies_page_options_as_query_params() {
        let transport = FakeTransport::new(200, EMPTY_PAGE);
        let client = make_client(transport.clone());

        client
            .sent(ListOptions::new().with(Page::new(20, 20)))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1.0/messageheaders?count=20&startIndex=20"
        );

        client
            .received(ListOptions::new().with(Page::new(20, 20)).with(Page::new(0, 5)))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1.0/inbox/messages?count=5&startIndex=0"
        );

        client
            .account(reference())
            .sent(ListOptions::new().with(Page::new(40, 20)))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v1.0/messageheaders?accountreference=EX0123456&count=20&startIndex=40"
        );
    }

    #[tokio::test]
    async fn message_fetches_single_header_by_escaped_id() {
        let xml = r#"<messageheader id="a/b" uri="u" xmlns="http://api.esendex.com/ns/"><status>Sent</status></messageheader>"#;
        let transport = FakeTransport::new(200, xml);
        let client = make_client(transport.clone());

        let header = client.message("a/b").await.unwrap();
        assert_eq!(header.id, "a/b");
        assert_eq!(header.status.as_deref(), Some("Sent"));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://example.invalid/v1.1/messageheaders/a%2Fb");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn message_rejects_blank_id_without_request() {
        let transport = FakeTransport::new(200, "");
        let client = make_client(transport.clone());

        let err = client.message("  ").await.unwrap_err();
        assert!(matches!(
            err,
            EsendexError::Precondition(ValidationError::Empty { field: "id" })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn accounts_are_listed_through_both_clients() {
        let xml = r#"<accounts xmlns="http://api.esendex.com/ns/">
  <account id="a1" uri="u1"><reference>EX0123456</reference></account>
</accounts>"#;
        let transport = FakeTransport::new(200, xml);
        let root = make_client(transport.clone());

        let accounts = root.accounts().await.unwrap();
        assert_eq!(accounts.accounts[0].reference, "EX0123456");
        let accounts = root.account(reference()).accounts().await.unwrap();
        assert_eq!(accounts.accounts.len(), 1);

        let urls: Vec<_> = transport.requests().into_iter().map(|it| it.url).collect();
        assert_eq!(
            urls,
            [
                "https://example.invalid/v1.0/accounts",
                "https://example.invalid/v1.0/accounts"
            ]
        );
    }

    #[tokio::test]
    async fn non_success_status_maps_to_gateway_error() {
        let transport = FakeTransport::new(401, "<errors><error>bad credentials</error></errors>");
        let client = make_client(transport);

        let err = client.accounts().await.unwrap_err();
        match err {
            EsendexError::Gateway { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(
                    body.as_deref(),
                    Some("<errors><error>bad credentials</error></errors>")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_error_body_maps_to_none() {
        let transport = FakeTransport::new(503, "  ");
        let client = make_client(transport).account(reference());

        let messages = Messages::one(Message::new("447700900123", "hi").unwrap());
        let err = client.send(messages).await.unwrap_err();
        assert!(matches!(
            err,
            EsendexError::Gateway {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode_error() {
        let transport = FakeTransport::new(200, "<messageheaders");
        let client = make_client(transport);

        let err = client.sent(ListOptions::default()).await.unwrap_err();
        assert!(matches!(err, EsendexError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_transport_error() {
        let client = make_client(FailingTransport);

        let err = client.received(ListOptions::default()).await.unwrap_err();
        assert!(matches!(err, EsendexError::Transport(_)));
    }

    #[test]
    fn builder_validates_base_url() {
        let credentials = Credentials::new("user", "pass").unwrap();

        let client = Client::builder(credentials.clone())
            .base_url("http://127.0.0.1:8080/esendex/")
            .timeout(Duration::from_secs(5))
            .user_agent("esendex-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8080/esendex/");
        assert_eq!(
            client
                .url(&["v1.0", "accounts"], &ListOptions::default())
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8080/esendex/v1.0/accounts"
        );

        let err = Client::builder(credentials.clone())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            EsendexError::Precondition(ValidationError::InvalidUrl { .. })
        ));

        let err = Client::builder(credentials)
            .base_url("mailto:ops@example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, EsendexError::Precondition(_)));
    }

    #[derive(Debug, Clone)]
    struct SeenRequest {
        method: String,
        path: String,
        authorization: Option<String>,
        accept: Option<String>,
        content_type: Option<String>,
        body: String,
    }

    async fn spawn_gateway() -> (String, Arc<Mutex<Vec<SeenRequest>>>) {
        use axum::body::to_bytes;
        use axum::extract::Request;
        use axum::http::Method;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let app = axum::Router::new().fallback(move |request: Request| {
            let recorder = recorder.clone();
            async move {
                let is_post = *request.method() == Method::POST;
                let mut record = {
                    let header = |name: &str| {
                        request
                            .headers()
                            .get(name)
                            .and_then(|it| it.to_str().ok())
                            .map(str::to_owned)
                    };
                    SeenRequest {
                        method: request.method().to_string(),
                        path: request.uri().to_string(),
                        authorization: header("authorization"),
                        accept: header("accept"),
                        content_type: header("content-type"),
                        body: String::new(),
                    }
                };
                let body = to_bytes(request.into_body(), usize::MAX).await.unwrap();
                record.body = String::from_utf8(body.to_vec()).unwrap();
                recorder.lock().unwrap().push(record);

                if is_post {
                    r#"<messageheaders batchid="B1" xmlns="http://api.esendex.com/ns/"><messageheader uri="u1" id="m1"/></messageheaders>"#
                } else {
                    r#"<accounts xmlns="http://api.esendex.com/ns/"/>"#
                }
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), seen)
    }

    #[tokio::test]
    async fn reqwest_transport_sends_basic_auth_and_xml_headers() {
        let (base_url, seen) = spawn_gateway().await;
        let credentials = Credentials::new("user@example.com", "secret").unwrap();
        let client = Client::builder(credentials)
            .base_url(base_url)
            .build()
            .unwrap();

        let response = client
            .account(reference())
            .send(Messages::one(Message::new("447700900123", "hi").unwrap()))
            .await
            .unwrap();
        assert_eq!(response.batch_id, "B1");

        let accounts = client.accounts().await.unwrap();
        assert!(accounts.accounts.is_empty());

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen.len(), 2);

        let send = &seen[0];
        assert_eq!(send.method, "POST");
        assert_eq!(send.path, "/v1.0/messagedispatcher");
        assert_eq!(
            send.authorization.as_deref(),
            Some("Basic dXNlckBleGFtcGxlLmNvbTpzZWNyZXQ=")
        );
        assert_eq!(send.content_type.as_deref(), Some("application/xml"));
        assert_eq!(send.accept.as_deref(), Some("application/xml"));
        assert!(send.body.contains("<to>447700900123</to>"), "{}", send.body);

        let list = &seen[1];
        assert_eq!(list.method, "GET");
        assert_eq!(list.path, "/v1.0/accounts");
        assert_eq!(list.authorization, send.authorization);
        assert_eq!(list.accept.as_deref(), Some("application/xml"));
        assert_eq!(list.content_type, None);
        assert!(list.body.is_empty());
    }

    #[test]
    fn default_client_targets_esendex_api() {
        let client = Client::new(Credentials::new("user", "pass").unwrap());
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
