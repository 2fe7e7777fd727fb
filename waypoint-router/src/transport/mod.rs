//! JSON-over-HTTP transport.
//!
//! Providers never talk to the network directly. They describe a request
//! as a [`JsonRequest`] and hand it to a [`JsonTransport`], which returns
//! the decoded reply whatever its HTTP status. Interpreting the status and
//! body is left to the provider.

mod http;
mod mock;

use async_trait::async_trait;
use serde_json::Value;

pub use http::{ReqwestTransport, TransportConfig};
pub use mock::MockTransport;

/// Longest body excerpt quoted in errors.
pub(crate) const BODY_EXCERPT_CHARS: usize = 500;

/// Errors raised before a usable reply was obtained.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// Connection, DNS or TLS failure
    #[error("network error: {0}")]
    Network(String),

    /// No reply within the configured timeout
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// A reply arrived but its body was not JSON
    #[error("invalid response body (status {status}): {message}")]
    InvalidBody {
        status: u16,
        message: String,
        body: String,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A JSON request, independent of any HTTP library.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl JsonRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A decoded reply. An empty body decodes to `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: Value,
}

impl JsonResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Send one JSON request and return the decoded reply.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn send(&self, request: JsonRequest) -> Result<JsonResponse, TransportError>;
}

/// Truncate a body for inclusion in an error message.
pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
