use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::domain::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP methods used by the Nimba SMS API.
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
/// One wire request, fully described before dispatch.
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Query parameters appended to the URL.
    pub params: Vec<(String, String)>,
    /// Form fields sent as an `application/x-www-form-urlencoded` body.
    pub form: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// Basic-auth (username, password) pair.
    pub auth: Option<(String, String)>,
    /// Per-call timeout override; must be non-zero when present.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
/// Raw wire response: status, body text, and response headers.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
/// Errors produced by the transport layer.
pub enum TransportError {
    /// A request argument was rejected before any network I/O.
    #[error("invalid argument: {0}")]
    Invalid(#[from] ValidationError),

    /// HTTP stack failure: DNS, refused connection, TLS, invalid URL.
    #[error("transport error: {0}")]
    Http(#[source] Box<dyn StdError + Send + Sync>),
}

/// Blocking seam between [`crate::Client`] and the wire.
///
/// The bundled implementation is [`NimbaHttpClient`]; substitute your own to
/// capture requests in tests.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
/// Builder for [`NimbaHttpClient`].
pub struct NimbaHttpClientBuilder {
    timeout: Option<Duration>,
    proxy: Option<String>,
    max_retries: u32,
}

impl NimbaHttpClientBuilder {
    /// Default timeout applied when a request carries none. Must be non-zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route all requests through the given proxy URL.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Re-dispatch a request up to `max_retries` times after a failed
    /// connection attempt. No backoff schedule is applied.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Build a [`NimbaHttpClient`].
    pub fn build(self) -> Result<NimbaHttpClient, TransportError> {
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(ValidationError::ZeroTimeout.into());
            }
        }

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(proxy) = self.proxy {
            let proxy = reqwest::Proxy::all(&proxy)
                .map_err(|err| TransportError::Http(Box::new(err)))?;
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::Http(Box::new(err)))?;

        Ok(NimbaHttpClient {
            client,
            timeout: self.timeout,
            max_retries: self.max_retries,
        })
    }
}

#[derive(Debug, Clone)]
/// Reqwest-backed blocking transport with connection reuse.
pub struct NimbaHttpClient {
    client: reqwest::blocking::Client,
    timeout: Option<Duration>,
    max_retries: u32,
}

impl NimbaHttpClient {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    /// Start building a transport with custom settings.
    pub fn builder() -> NimbaHttpClientBuilder {
        NimbaHttpClientBuilder::default()
    }

    fn dispatch(
        &self,
        request: &HttpRequest,
        url: Url,
        timeout: Option<Duration>,
    ) -> Result<reqwest::blocking::Response, reqwest::Error> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some((username, password)) = &request.auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.send()
    }
}

impl HttpTransport for NimbaHttpClient {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Some(timeout) = request.timeout {
            if timeout.is_zero() {
                return Err(ValidationError::ZeroTimeout.into());
            }
        }

        let url = effective_url(&request.url, &request.params)
            .map_err(|err| TransportError::Http(Box::new(err)))?;
        log_request(&request, &url);

        let timeout = request.timeout.or(self.timeout);
        let mut attempt = 0;
        let response = loop {
            match self.dispatch(&request, url.clone(), timeout) {
                Ok(response) => break response,
                Err(err) if attempt < self.max_retries && err.is_connect() => {
                    attempt += 1;
                }
                Err(err) => return Err(TransportError::Http(Box::new(err))),
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect::<Vec<_>>();
        log_response(status, &headers);

        let body = response
            .text()
            .map_err(|err| TransportError::Http(Box::new(err)))?;

        Ok(HttpResponse {
            status,
            body,
            headers,
        })
    }
}

fn effective_url(url: &str, params: &[(String, String)]) -> Result<Url, url::ParseError> {
    if params.is_empty() {
        Url::parse(url)
    } else {
        Url::parse_with_params(url, params)
    }
}

fn log_request(request: &HttpRequest, url: &Url) {
    let headers = loggable_headers(&request.headers);
    tracing::info!(
        method = %request.method,
        url = %url,
        params = ?request.params,
        headers = ?headers,
        "nimba sms api request"
    );
}

fn log_response(status: u16, headers: &[(String, String)]) {
    let headers = loggable_headers(headers);
    tracing::info!(status, headers = ?headers, "nimba sms api response");
}

// Authorization values must never reach the log output.
fn loggable_headers(headers: &[(String, String)]) -> Vec<(&str, &str)> {
    headers
        .iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}
