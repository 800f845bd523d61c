//! HTTP transport adapter — one GET per call, failures classified into
//! [`AdsbdbError`] values.
//!
//! The raw HTTP capability sits behind [`HttpTransport`] so the client can be
//! driven by a stub in tests; [`ReqwestTransport`] is the production
//! implementation.

use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::types::{AdsbdbError, Result};

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Why an HTTP exchange did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Connect(String),
    Timeout,
    Other(String),
}

/// Blocking "perform GET, return status + body or fail" capability.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportFailure>;
}

// ---------------------------------------------------------------------------
// reqwest implementation
// ---------------------------------------------------------------------------

/// [`HttpTransport`] backed by `reqwest::blocking::Client`.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a client carrying the configured user agent and timeout.
    ///
    /// Without a configured timeout, reqwest's own default applies.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdsbdbError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(ReqwestTransport { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportFailure> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(classify)?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

fn classify(e: reqwest::Error) -> TransportFailure {
    if e.is_timeout() {
        TransportFailure::Timeout
    } else if e.is_connect() {
        TransportFailure::Connect(e.to_string())
    } else {
        TransportFailure::Other(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Request + classification
// ---------------------------------------------------------------------------

/// Join `path` to `base_url`, unless `path` is already an absolute URL.
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build `base_url` followed by `segments`, each percent-encoded as one
/// path segment, so `/`, `?` and `#` in a segment stay inside it.
///
/// `.` and `..` would be collapsed by URL normalisation and are rejected.
pub fn segments_url(base_url: &str, segments: &[&str]) -> Result<String> {
    if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(AdsbdbError::Format(format!(
            "Path segment '{dot}' is not a valid identifier."
        )));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| AdsbdbError::Config(format!("invalid base URL {base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AdsbdbError::Config(format!("invalid base URL {base_url}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.to_string())
}

/// Perform one GET against `base_url`/`path` and decode the JSON body.
///
/// `path` is used verbatim; see [`segments_url`] for caller-supplied parts.
pub fn fetch_json(transport: &dyn HttpTransport, base_url: &str, path: &str) -> Result<Value> {
    fetch_url(transport, join_url(base_url, path))
}

/// Perform one GET against an absolute `url` and decode the JSON body.
///
/// 2xx → decoded body. 404 → [`AdsbdbError::NotFound`] carrying the
/// service's `response` message when there is one. Any other status, and
/// every transport failure, map to the transport variants.
pub fn fetch_url(transport: &dyn HttpTransport, url: String) -> Result<Value> {
    tracing::debug!("GET {}", url);

    let response = transport.get(&url).map_err(|failure| {
        tracing::warn!("GET {} failed: {:?}", url, failure);
        match failure {
            TransportFailure::Connect(detail) => AdsbdbError::Connection(detail),
            TransportFailure::Timeout => AdsbdbError::Timeout,
            TransportFailure::Other(detail) => AdsbdbError::Request(detail),
        }
    })?;

    tracing::debug!(status = response.status, "response from {}", url);

    match response.status {
        200..=299 => serde_json::from_slice(&response.body).map_err(|e| {
            AdsbdbError::Request(format!("invalid JSON in response from {url}: {e}"))
        }),
        404 => Err(AdsbdbError::NotFound(not_found_message(&response.body))),
        status => Err(AdsbdbError::Http { status, url }),
    }
}

fn not_found_message(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => match value.get("response") {
            Some(Value::String(message)) => message.clone(),
            _ => "not found".to_string(),
        },
        Err(_) => "Resource not found (404).".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
