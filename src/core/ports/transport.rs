//! HTTP transport port
//!
//! Defines the single-shot request interface the core uses to talk to the
//! outside world. No retries happen behind this trait.

use std::time::Duration;

use thiserror::Error;

/// Client label sent with every request
pub const USER_AGENT: &str = "guardian-bot";

/// Timeout used when a caller does not pick one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Per-request options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Give up after this long
    pub timeout: Duration,
    /// Extra headers, sent after the defaults
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

impl RequestOptions {
    /// Options with a timeout and no extra headers
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            headers: Vec::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Body of a POST request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with a JSON content type
    Json(serde_json::Value),
    /// Sent verbatim, without a content type of its own
    Bytes(Vec<u8>),
}

/// A completed HTTP exchange, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body decoded leniently as UTF-8
    pub body: String,
}

impl HttpResponse {
    /// Build a response
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the success or redirect range `[200, 400)`
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 400
    }
}

/// The request never produced a response (DNS, refused, timeout, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Create an error from failure text
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure text
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Single-attempt HTTP client
pub trait Transport {
    /// Issue one GET request
    fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, TransportError>;

    /// Issue one POST request
    ///
    /// Without a body, or with a JSON body, the request carries a JSON
    /// content type. Raw bytes are sent as they are.
    fn post(
        &self,
        url: &str,
        options: &RequestOptions,
        body: Option<&RequestBody>,
    ) -> Result<HttpResponse, TransportError>;
}
