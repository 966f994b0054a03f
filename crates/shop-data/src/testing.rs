//! Recording transport for tests.
//!
//! Responses are registered per method and URL (query string included) and
//! replayed for every matching request. Every request is recorded so tests
//! can assert on what was actually sent.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use crate::{FetchError, Method, RequestBuilder, Response, Transport};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// In-memory transport with canned replies.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), Result<Response, FetchError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `GET url` with `status` and `value` serialized as JSON.
    pub fn json<T: Serialize>(&self, url: impl Into<String>, status: u16, value: &T) -> &Self {
        let response = Response::from_json(status, value).expect("mock body serializes");
        self.reply(Method::GET, url, Ok(response))
    }

    /// Reply to `GET url` with a plain-text body.
    pub fn text(&self, url: impl Into<String>, status: u16, body: &str) -> &Self {
        self.reply(Method::GET, url, Ok(Response::from_text(status, body)))
    }

    /// Fail `GET url` at the transport level.
    pub fn fail(&self, url: impl Into<String>, error: FetchError) -> &Self {
        self.reply(Method::GET, url, Err(error))
    }

    /// Register an arbitrary reply.
    pub fn reply(
        &self,
        method: Method,
        url: impl Into<String>,
        reply: Result<Response, FetchError>,
    ) -> &Self {
        self.routes
            .lock()
            .expect("mock routes lock")
            .insert((method, url.into()), reply);
        self
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock requests lock").clone()
    }

    /// Assert exactly one request was sent to `url` with `method` and return it.
    pub fn expect_one(&self, method: Method, url: &str) -> RecordedRequest {
        let matching: Vec<RecordedRequest> = self
            .requests()
            .into_iter()
            .filter(|r| r.method == method && r.url == url)
            .collect();
        assert_eq!(
            matching.len(),
            1,
            "expected one {} {}, got {:?}",
            method.as_str(),
            url,
            self.requests()
        );
        matching.into_iter().next().expect("one request")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = request.full_url();
        let key = (request.method.clone(), url.clone());
        self.requests
            .lock()
            .expect("mock requests lock")
            .push(RecordedRequest {
                method: request.method,
                url,
                headers: request.headers,
            });

        let reply = self.routes.lock().expect("mock routes lock").get(&key).cloned();
        reply.unwrap_or_else(|| {
            Err(FetchError::RequestError(format!(
                "no mock reply for {} {}",
                key.0, key.1
            )))
        })
    }
}
