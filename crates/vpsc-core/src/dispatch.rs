//! The typed transport dispatcher.
//!
//! Every API operation travels through [`Dispatcher::execute_none`],
//! [`Dispatcher::execute_single`] or [`Dispatcher::execute_collection`]:
//! one [`RequestDescriptor`] in, exactly one HTTP exchange out, and either
//! a typed result or a classified [`Error`](crate::error::Error) back.
//! The dispatcher guarantees consistent authentication, body encoding and
//! error handling across all operations and performs no retries; retry and
//! backoff policy belongs to the caller.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Method, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{classify_status, Error, Result};

const USER_AGENT: &str = concat!("vpsc/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default idle timeout for the connection pool in seconds.
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP transport configuration.
///
/// Pooling and timeout knobs for the underlying [`reqwest::Client`]; the
/// dispatcher contract itself does not depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,

    /// Connection pool idle timeout.
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
}

impl HttpConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable specification of one API operation.
///
/// Constructed fresh per call by the resource façade: an endpoint path
/// (with any resource identifiers already embedded), an HTTP method and
/// an optional request payload. The expected response shape is chosen by
/// the dispatcher method the descriptor is handed to.
#[derive(Debug, Clone)]
pub struct RequestDescriptor<'a, B: Serialize + ?Sized = ()> {
    method: Method,
    endpoint: String,
    body: Option<&'a B>,
}

impl RequestDescriptor<'static, ()> {
    /// Create a body-less descriptor.
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
        }
    }
}

impl<'a, B: Serialize + ?Sized> RequestDescriptor<'a, B> {
    /// Attach a typed request payload.
    ///
    /// The payload is serialized to compact JSON with unset optional
    /// fields omitted, and `content-type: application/json` is sent.
    #[must_use]
    pub fn with_body<'b, T: Serialize + ?Sized>(self, body: &'b T) -> RequestDescriptor<'b, T> {
        RequestDescriptor {
            method: self.method,
            endpoint: self.endpoint,
            body: Some(body),
        }
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The endpoint path, relative to the configured host.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a request payload is attached.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Executes request descriptors against the remote API.
///
/// Holds the immutable credentials and one shared [`reqwest::Client`];
/// no mutable state survives between calls, so a `Dispatcher` is cheap
/// to clone and safe to use from concurrent tasks.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    http: Client,
    host: String,
    api_key: SecretString,
}

impl Dispatcher {
    /// Create a dispatcher with default transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_http_config(config, HttpConfig::new())
    }

    /// Create a dispatcher with explicit transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn with_http_config(config: ApiConfig, http_config: HttpConfig) -> Result<Self> {
        config.check()?;

        let http = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(http_config.timeout)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            host: config.host,
            api_key: config.api_key,
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Execute an operation that yields no value.
    ///
    /// Any success status (200, 202, 204, ...) is `Ok(())`; the response
    /// body, if any, is discarded.
    ///
    /// # Errors
    ///
    /// Returns the classified error for non-success statuses and
    /// transport failures.
    pub async fn execute_none<B>(&self, descriptor: RequestDescriptor<'_, B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(&descriptor).await.map(drop)
    }

    /// Execute an operation that yields exactly one object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContractViolation`] when a success response has
    /// an empty body, [`Error::DecodeFailure`] when the body does not
    /// parse as `T`, and the classified error otherwise.
    pub async fn execute_single<T, B>(&self, descriptor: RequestDescriptor<'_, B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let endpoint = descriptor.endpoint.clone();
        let response = self.send(&descriptor).await?;
        let bytes = response.bytes().await?;

        if bytes.is_empty() {
            return Err(Error::ContractViolation(format!(
                "expected one object from `{endpoint}`, got an empty body"
            )));
        }

        serde_json::from_slice(&bytes).map_err(|err| Error::DecodeFailure {
            message: err.to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Execute an operation that yields a collection.
    ///
    /// The JSON array is decoded eagerly into a `Vec`, preserving the
    /// server-supplied order; elements are never reordered or
    /// deduplicated. An empty array is an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContractViolation`] when a success response has
    /// an empty body, [`Error::DecodeFailure`] when the body does not
    /// parse as an array of `T`, and the classified error otherwise.
    pub async fn execute_collection<T, B>(
        &self,
        descriptor: RequestDescriptor<'_, B>,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let endpoint = descriptor.endpoint.clone();
        let response = self.send(&descriptor).await?;
        let bytes = response.bytes().await?;

        if bytes.is_empty() {
            return Err(Error::ContractViolation(format!(
                "expected a JSON array from `{endpoint}`, got an empty body"
            )));
        }

        serde_json::from_slice(&bytes).map_err(|err| Error::DecodeFailure {
            message: err.to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Issue exactly one HTTP request for the descriptor.
    ///
    /// The Authorization header is always present; `content-type` and
    /// body bytes are sent only when the descriptor carries a payload.
    /// The upstream API rejects GET requests carrying a content-type
    /// header, so a body-less request must stay header-clean.
    async fn send<B>(&self, descriptor: &RequestDescriptor<'_, B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = Url::parse(&format!("{}{}", self.host, descriptor.endpoint))?;

        debug!(
            method = %descriptor.method,
            endpoint = %descriptor.endpoint,
            "dispatching API request"
        );

        let mut request = self
            .http
            .request(descriptor.method.clone(), url)
            .bearer_auth(self.api_key.expose_secret());

        if let Some(body) = descriptor.body {
            let bytes = serde_json::to_vec(body).map_err(|err| Error::Encode(err.to_string()))?;
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = classify_status(status, body);
        debug!(
            status = status.as_u16(),
            code = error.error_code(),
            "API request failed"
        );
        Err(error)
    }
}
