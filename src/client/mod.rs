//! Client layer: authenticates, dispatches requests, and maps transport ↔ domain.

mod http;
mod session;

use std::sync::Arc;
use std::time::Duration;

use serde::de::IgnoredAny;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::{
    ChannelMessage, ContactGroupMessage, ContactsMessage, CreateSenderId, Credentials, Message,
    Password, SenderIdentity, SessionToken, Username, ValidationError,
};
use crate::transport::{Envelope, TransportError};

pub use http::{BoxError, BoxFuture, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use http::ReqwestTransport;
use session::Session;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://production.olympusmedia.co.zm/api/v1";
/// Per-request timeout used unless overridden on the builder.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const LOGIN_PATH: &str = "/authentication/web/login";
const COMPOSE_PATH: &str = "/notify/channels/messages/compose";
const SENDERS_PATH: &str = "/notify/sender-ids/fetch";

const ERROR_CONTEXT_PARAM: &str = "error_context";
const ERROR_CONTEXT_VALUE: &str = "CONTEXT_API_ERROR_JSON";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NotifyClient`].
///
/// Nothing is retried. Authentication failures during [`NotifyClient::connect`]
/// are returned here rather than aborting the process.
pub enum NotifyError {
    /// Username or password was empty.
    #[error("username and password are required")]
    MissingCredentials,

    /// Username is not exactly 12 digits.
    #[error("username is invalid: {input}")]
    InvalidUsername { input: String },

    /// The login endpoint was reached but rejected the credentials.
    #[error("failed to authenticate, check the username and password: {message}")]
    InvalidCredentials { message: String },

    /// A contacts message had no recipients.
    #[error("contacts are missing")]
    MissingContacts,

    /// An authorized call was attempted without a session token.
    #[error("authorization token is missing")]
    MissingAuth,

    /// A message field was rejected before sending.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[source] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status with a body that is not a JSON envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] BoxError),

    /// The service answered with `success: false`.
    #[error("request rejected: {message}")]
    RemoteRejection {
        message: String,
        code: Option<i64>,
        title: Option<String>,
    },

    /// The operation is part of the API surface but not built yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The configured base URL could not be parsed.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl From<ValidationError> for NotifyError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::Empty {
                field: Username::FIELD | Password::FIELD,
            } => Self::MissingCredentials,
            ValidationError::InvalidUsername { input } => Self::InvalidUsername { input },
            ValidationError::MissingContacts => Self::MissingContacts,
            other => Self::InvalidPayload(other),
        }
    }
}

#[derive(Clone)]
/// Builder for [`NotifyClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// the HTTP transport itself.
pub struct NotifyClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl NotifyClientBuilder {
    /// Create a builder with the production base URL and a 30 second timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API root (`.../api/v1`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of `reqwest`.
    ///
    /// `timeout` and `user_agent` are ignored when a transport is supplied.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client and log in.
    ///
    /// Errors:
    /// - [`NotifyError::Transport`] when the login request could not be made,
    /// - [`NotifyError::InvalidCredentials`] when the service rejected the login,
    /// - [`NotifyError::MalformedResponse`] when the login reply carried no token.
    pub async fn connect(self) -> Result<NotifyClient, NotifyError> {
        let base_url = Url::parse(&self.base_url)?;

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| NotifyError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        let client = NotifyClient {
            credentials: self.credentials,
            base_url,
            http,
            session: Arc::new(Session::default()),
        };
        client.reauthenticate().await?;
        Ok(client)
    }
}

#[derive(Clone)]
/// High-level Notify SMS client.
///
/// A client only exists in the authenticated state: [`NotifyClient::connect`]
/// logs in before returning. The session token is never refreshed
/// automatically, call [`NotifyClient::reauthenticate`] when the service starts
/// rejecting it.
///
/// Clones share the transport and the session token.
pub struct NotifyClient {
    credentials: Credentials,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
    session: Arc<Session>,
}

impl NotifyClient {
    /// Validate credentials, log in against the production API and return a ready client.
    ///
    /// For more customization, use [`NotifyClient::builder`].
    pub async fn connect(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let credentials = Credentials::new(username, password)?;
        Self::builder(credentials).connect().await
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NotifyClientBuilder {
        NotifyClientBuilder::new(credentials)
    }

    /// Current session token, if any.
    pub fn session_token(&self) -> Option<SessionToken> {
        self.session.token()
    }

    /// Log in again and replace the session token.
    ///
    /// On failure the previous token is kept.
    #[instrument(skip_all, fields(username = %self.credentials.username().as_str()))]
    pub async fn reauthenticate(&self) -> Result<(), NotifyError> {
        let body =
            crate::transport::encode_login_json(&self.credentials).map_err(encode_failure)?;

        let response = self.execute(HttpMethod::Post, LOGIN_PATH, Some(body), false).await?;
        let envelope = decode_response(response, crate::transport::decode_login_json_response)?;

        if !envelope.success {
            let message = envelope.rejection_message();
            warn!(message = %message, "login rejected");
            return Err(NotifyError::InvalidCredentials { message });
        }

        let token = envelope
            .payload
            .and_then(|payload| payload.token)
            .ok_or_else(|| {
                malformed(TransportError::MissingField {
                    field: SessionToken::FIELD,
                })
            })?;
        let token = SessionToken::new(token).map_err(malformed)?;

        self.session.replace(token);
        debug!("session token stored");
        Ok(())
    }

    /// Send a message to an explicit list of contacts.
    ///
    /// Errors:
    /// - [`NotifyError::MissingContacts`] when `params.contacts` is empty (no request is made),
    /// - [`NotifyError::InvalidPayload`] when the sender id or message is empty,
    /// - [`NotifyError::RemoteRejection`] when the service refuses the message.
    #[instrument(skip_all, fields(contacts = params.contacts.len()))]
    pub async fn send_to_contacts(&self, params: ContactsMessage) -> Result<(), NotifyError> {
        let message = Message::try_from(params)?;
        self.send(&message).await
    }

    /// Send a message to every subscriber of a channel.
    ///
    /// The channel name is not validated locally; the service rejects unknown channels.
    #[instrument(skip_all, fields(channel = %params.channel))]
    pub async fn send_to_channel(&self, params: ChannelMessage) -> Result<(), NotifyError> {
        let message = Message::try_from(params)?;
        self.send(&message).await
    }

    /// Send a message to every member of a contact group.
    ///
    /// The group id is not validated locally; the service rejects unknown groups.
    #[instrument(skip_all, fields(contact_group = %params.contact_group))]
    pub async fn send_to_contact_group(
        &self,
        params: ContactGroupMessage,
    ) -> Result<(), NotifyError> {
        let message = Message::try_from(params)?;
        self.send(&message).await
    }

    /// Send an already composed [`Message`].
    ///
    /// A `ToContacts` message with no contacts fails with
    /// [`NotifyError::MissingContacts`] before any request is made.
    pub async fn send(&self, message: &Message) -> Result<(), NotifyError> {
        if matches!(message, Message::ToContacts { contacts, .. } if contacts.is_empty()) {
            return Err(NotifyError::MissingContacts);
        }
        let body = crate::transport::encode_compose_json(message).map_err(encode_failure)?;
        debug!(
            recipient_type = message.recipient_type().as_str(),
            "composing message"
        );
        self.dispatch::<IgnoredAny>(HttpMethod::Post, COMPOSE_PATH, Some(body), true)
            .await?;
        Ok(())
    }

    /// List the sender identities configured for the account.
    #[instrument(skip_all)]
    pub async fn list_senders(&self) -> Result<Vec<SenderIdentity>, NotifyError> {
        let response = self.execute(HttpMethod::Get, SENDERS_PATH, None, true).await?;
        let envelope = decode_response(response, crate::transport::decode_senders_json_response)?;
        let payload = ensure_success(envelope)?;

        let senders = payload.unwrap_or_default().into_senders();
        debug!(count = senders.len(), "fetched sender identities");
        Ok(senders)
    }

    /// Register a new sender id. Not implemented yet.
    pub async fn create_sender_id(
        &self,
        _params: CreateSenderId,
    ) -> Result<SenderIdentity, NotifyError> {
        Err(NotifyError::NotImplemented("create_sender_id"))
    }

    /// Fetch the SMS balance. Not implemented yet.
    pub async fn get_balance(&self) -> Result<(), NotifyError> {
        Err(NotifyError::NotImplemented("get_balance"))
    }

    /// Issue an authorized or anonymous request and classify the decoded envelope.
    async fn dispatch<T: serde::de::DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        require_auth: bool,
    ) -> Result<Option<T>, NotifyError> {
        let response = self.execute(method, path, body, require_auth).await?;
        let envelope = decode_response(response, crate::transport::decode_envelope::<T>)?;
        ensure_success(envelope)
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        require_auth: bool,
    ) -> Result<HttpResponse, NotifyError> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if require_auth {
            let token = self.session.token().ok_or(NotifyError::MissingAuth)?;
            headers.push(("Authorization".to_owned(), token.bearer()));
        }

        let url = self.endpoint(path);
        debug!(method = ?method, path, "sending request");

        let response = self
            .http
            .execute(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(|err| {
                warn!(error = %err, path, "transport failure");
                NotifyError::Transport(err)
            })?;

        debug!(status = response.status, path, "received response");
        Ok(response)
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.query_pairs_mut()
            .append_pair(ERROR_CONTEXT_PARAM, ERROR_CONTEXT_VALUE);
        url
    }
}

fn encode_failure(err: TransportError) -> NotifyError {
    NotifyError::Transport(Box::new(err))
}

fn malformed(err: impl std::error::Error + Send + Sync + 'static) -> NotifyError {
    NotifyError::MalformedResponse(Box::new(err))
}

fn decode_response<T>(
    response: HttpResponse,
    decode: impl FnOnce(&str) -> Result<Envelope<T>, TransportError>,
) -> Result<Envelope<T>, NotifyError> {
    match decode(&response.body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..=299).contains(&response.status) => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(NotifyError::HttpStatus {
                status: response.status,
                body,
            })
        }
        Err(err) => Err(malformed(err)),
    }
}

fn ensure_success<T>(envelope: Envelope<T>) -> Result<Option<T>, NotifyError> {
    if envelope.success {
        return Ok(envelope.payload);
    }

    let message = envelope.rejection_message();
    warn!(message = %message, "request rejected by service");
    let (code, title) = envelope
        .error
        .map(|err| (err.code, err.title))
        .unwrap_or_default();
    Err(NotifyError::RemoteRejection {
        message,
        code,
        title,
    })
}
