//! Client layer: credentials, standard headers, and resource accessors.

use std::env::consts::{ARCH, OS};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{Credentials, ValidationError};
use crate::rest::{Accounts, Contacts, Groups, Messages, SenderNames};
use crate::transport::{
    HttpMethod, HttpRequest, HttpTransport, NimbaHttpClient, TransportError,
};

/// Production Nimba SMS API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nimbasms.com";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Client`] and its resource accessors.
///
/// Unsuccessful HTTP responses (status >= 400) are NOT errors: they come back
/// as an [`ApiResponse`] with [`ApiResponse::ok`] returning `false`, and the
/// caller decides how to react. Only programmer/config mistakes and transport
/// failures surface as `Err`.
pub enum NimbaError {
    /// The client was constructed with missing or invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// A method argument was rejected before any network I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[source] ValidationError),

    /// HTTP stack failure (DNS, refused connection, TLS), surfaced as-is.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A response body could not be parsed as JSON.
    #[error("invalid JSON response body: {0}")]
    Parse(#[source] serde_json::Error),
}

impl From<TransportError> for NimbaError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::Invalid(err) => Self::InvalidArgument(err),
            TransportError::Http(err) => Self::Transport(err),
        }
    }
}

#[derive(Debug, Clone)]
/// Data output of one API call.
pub struct ApiResponse {
    status_code: u16,
    body: String,
    headers: Vec<(String, String)>,
}

impl ApiResponse {
    pub(crate) fn new(status_code: u16, body: String, headers: Vec<(String, String)>) -> Self {
        Self {
            status_code,
            body,
            headers,
        }
    }

    /// HTTP status code of the response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// True for any status below 400.
    pub fn ok(&self) -> bool {
        self.status_code < 400
    }

    /// Raw response body.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Response headers in arrival order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Parse the body as JSON. The body is parsed on every access.
    pub fn data(&self) -> Result<serde_json::Value, NimbaError> {
        serde_json::from_str(&self.body).map_err(NimbaError::Parse)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status_code, self.body)
    }
}

/// Shared per-client state: credentials, base URL, and the transport.
pub(crate) struct ClientCore {
    auth: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl ClientCore {
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch a request with the standard headers merged in.
    ///
    /// `User-Agent` and `X-Nimba-Client` always reflect this client;
    /// `Accept` and (for POST) `Content-Type` are defaulted only when the
    /// caller did not set them. Stored credentials are used unless an
    /// explicit `auth` override is given.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn request(
        &self,
        method: HttpMethod,
        uri: &str,
        params: Vec<(String, String)>,
        form: Vec<(String, String)>,
        mut headers: Vec<(String, String)>,
        auth: Option<Credentials>,
        timeout: Option<Duration>,
    ) -> Result<ApiResponse, NimbaError> {
        set_header(&mut headers, "User-Agent", user_agent());
        set_header(&mut headers, "X-Nimba-Client", "utf-8".to_owned());
        if method == HttpMethod::Post && !has_header(&headers, "Content-Type") {
            headers.push((
                "Content-Type".to_owned(),
                "application/x-www-form-urlencoded".to_owned(),
            ));
        }
        if !has_header(&headers, "Accept") {
            headers.push(("Accept".to_owned(), "application/json".to_owned()));
        }

        let auth = auth.unwrap_or_else(|| self.auth.clone());
        let request = HttpRequest {
            method,
            url: uri.to_owned(),
            params,
            form,
            headers,
            auth: Some((
                auth.account_sid().as_str().to_owned(),
                auth.access_token().as_str().to_owned(),
            )),
            timeout,
        };

        let response = self.http.send(request)?;
        Ok(ApiResponse::new(
            response.status,
            response.body,
            response.headers,
        ))
    }
}

fn user_agent() -> String {
    format!(
        "nimba-rust/{} ({OS} {ARCH}) rust/{}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_RUST_VERSION"),
    )
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    for (key, existing) in headers.iter_mut() {
        if key.eq_ignore_ascii_case(name) {
            *existing = value;
            return;
        }
    }
    headers.push((name.to_owned(), value));
}

#[derive(Clone)]
/// Builder for [`Client`].
pub struct ClientBuilder {
    account_sid: String,
    access_token: String,
    base_url: String,
    timeout: Option<Duration>,
    proxy: Option<String>,
    max_retries: Option<u32>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    fn new(account_sid: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            proxy: None,
            max_retries: None,
            transport: None,
        }
    }

    /// Override the API base URL, e.g. for a staging environment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Default timeout for every request. Must be non-zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route all requests through the given proxy URL.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Maximum number of re-dispatches after failed connection attempts.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Substitute the HTTP transport. Intended for tests and custom stacks;
    /// `timeout`, `proxy` and `max_retries` are ignored when set.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`Client`]. Fails with [`NimbaError::Configuration`] before
    /// any network access when credentials or the base URL are invalid.
    pub fn build(self) -> Result<Client, NimbaError> {
        let auth = Credentials::new(self.account_sid, self.access_token)
            .map_err(NimbaError::Configuration)?;

        let base_url = self.base_url.trim_end_matches('/').to_owned();
        if Url::parse(&base_url).is_err() {
            return Err(NimbaError::Configuration(ValidationError::InvalidBaseUrl {
                input: base_url,
            }));
        }

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = NimbaHttpClient::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(proxy) = self.proxy {
                    builder = builder.proxy(proxy);
                }
                if let Some(max_retries) = self.max_retries {
                    builder = builder.max_retries(max_retries);
                }
                Arc::new(builder.build()?)
            }
        };

        Ok(Client {
            core: Arc::new(ClientCore {
                auth,
                base_url,
                http,
            }),
            accounts: None,
            messages: None,
            contacts: None,
            groups: None,
            sendernames: None,
        })
    }
}

/// A client for accessing the Nimba SMS API.
///
/// Each resource accessor is created lazily on first access and cached for
/// the client's lifetime. Pagination cursors live inside the accessors and
/// are advanced through `&mut self`, so a client is meant for sequential,
/// single-threaded use.
pub struct Client {
    core: Arc<ClientCore>,
    accounts: Option<Accounts>,
    messages: Option<Messages>,
    contacts: Option<Contacts>,
    groups: Option<Groups>,
    sendernames: Option<SenderNames>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.core.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for the production endpoint.
    pub fn new(
        account_sid: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, NimbaError> {
        Self::builder(account_sid, access_token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        account_sid: impl Into<String>,
        access_token: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder::new(account_sid, access_token)
    }

    /// Issue a raw request against the API with the standard headers merged
    /// in. The resource accessors cover the common endpoints; this is the
    /// escape hatch for anything else.
    #[allow(clippy::too_many_arguments)]
    pub fn request(
        &self,
        method: HttpMethod,
        uri: &str,
        params: Vec<(String, String)>,
        form: Vec<(String, String)>,
        headers: Vec<(String, String)>,
        auth: Option<Credentials>,
        timeout: Option<Duration>,
    ) -> Result<ApiResponse, NimbaError> {
        self.core
            .request(method, uri, params, form, headers, auth, timeout)
    }

    /// Account service.
    pub fn accounts(&mut self) -> &Accounts {
        self.accounts
            .get_or_insert_with(|| Accounts::new(Arc::clone(&self.core)))
    }

    /// Message service.
    pub fn messages(&mut self) -> &mut Messages {
        self.messages
            .get_or_insert_with(|| Messages::new(Arc::clone(&self.core)))
    }

    /// Contact service.
    pub fn contacts(&mut self) -> &mut Contacts {
        self.contacts
            .get_or_insert_with(|| Contacts::new(Arc::clone(&self.core)))
    }

    /// Group service (read-only).
    pub fn groups(&mut self) -> &mut Groups {
        self.groups
            .get_or_insert_with(|| Groups::new(Arc::clone(&self.core)))
    }

    /// Sender name service (read-only).
    pub fn sendernames(&mut self) -> &mut SenderNames {
        self.sendernames
            .get_or_insert_with(|| SenderNames::new(Arc::clone(&self.core)))
    }
}
