//! Responses as returned by a [`Transport`](crate::Transport).

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::FetchError;

/// Status, headers and the fully read body of a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A reply whose body is `value` encoded as JSON.
    pub fn from_json<T: Serialize>(status: u16, value: &T) -> Result<Self, FetchError> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(status, content_type("application/json"), body))
    }

    /// A reply with a plain-text body.
    pub fn from_text(status: u16, text: impl Into<String>) -> Self {
        Self::new(status, content_type("text/plain"), text.into().into_bytes())
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body decoded as UTF-8.
    pub fn text(&self) -> Result<String, FetchError> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| FetchError::ParseError(format!("body is not UTF-8: {}", e)))
    }

    /// The body decoded as JSON into `T`.
    ///
    /// Decoding failures become [`FetchError::ParseError`] carrying the
    /// decoder's message.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Turn a non-2xx reply into [`FetchError::HttpError`].
    ///
    /// The body becomes the error message verbatim.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = String::from_utf8_lossy(&self.body).into_owned();
        Err(FetchError::http(self.status, message))
    }
}

fn content_type(value: &str) -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), value.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_success_range() {
        assert!(raw(200, b"").is_success());
        assert!(raw(204, b"").is_success());
        assert!(!raw(199, b"").is_success());
        assert!(!raw(304, b"").is_success());
        assert!(!raw(404, b"").is_success());
    }

    #[test]
    fn test_json_body() {
        let resp = raw(200, br#"[{"id": 1}, {"id": 2}]"#);
        let ids: Vec<serde_json::Value> = resp.json().unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_json_parse_error() {
        let result: Result<Vec<i32>, _> = raw(200, b"Invalid JSON").json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        assert!(matches!(raw(200, &[0xff, 0xfe]).text(), Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_from_json() {
        let resp = Response::from_json(201, &vec!["a", "b"]).unwrap();
        assert_eq!(resp.status, 201);
        assert_eq!(resp.headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(resp.json::<Vec<String>>().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_error_for_status_passes_success() {
        let resp = Response::from_text(200, "ok").error_for_status().unwrap();
        assert_eq!(resp.text().unwrap(), "ok");
    }

    #[test]
    fn test_error_for_status_keeps_body() {
        let err = Response::from_text(404, "Product not found")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err, FetchError::http(404, "Product not found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_error_for_status_lossy_body() {
        let err = raw(500, &[b'o', b'k', 0xff]).error_for_status().unwrap_err();
        assert!(matches!(err, FetchError::HttpError { ref message, .. } if message.starts_with("ok")));
    }
}
