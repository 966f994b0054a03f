//! Errors surfaced by [`FetchClient`](crate::FetchClient).

use thiserror::Error;

/// Why a fetch failed.
///
/// Catalog operations return these to their caller as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never got a reply (connection refused, DNS, network down).
    #[error("request failed: {0}")]
    RequestError(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Non-2xx reply. `message` is the body exactly as the server sent it.
    #[error("HTTP {status} {status_text}: {message}")]
    HttpError {
        status: u16,
        status_text: String,
        message: String,
    },

    /// The body could not be decoded.
    #[error("could not parse response: {0}")]
    ParseError(String),

    #[error("request timed out")]
    Timeout,

    /// Encoding a value as JSON failed.
    #[error("could not encode JSON: {0}")]
    JsonError(String),
}

impl FetchError {
    /// Build an HTTP error from a status code and response body.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        FetchError::HttpError {
            status,
            status_text: reason_phrase(status).to_string(),
            message: message.into(),
        }
    }

    /// The HTTP status code, if this is an HTTP error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

/// Canonical reason phrase for a status code ("Not Found" for 404).
fn reason_phrase(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}
