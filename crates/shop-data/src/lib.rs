//! HTTP fetch client for the Shopfront storefront.
//!
//! Provides a small builder API over a pluggable [`Transport`] with
//! automatic JSON handling. Production code sends through
//! [`ReqwestTransport`]; tests swap in the recording `MockTransport`
//! (feature `testing`).
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::FetchClient;
//!
//! let client = FetchClient::http(None)?.with_base_url("https://api.example.com");
//!
//! let categories: Vec<Category> = client.get_json("/api/v1/categories").await?;
//!
//! let products: Vec<Product> = client
//!     .get("/api/v1/products")
//!     .query("categorySlug", "shoes")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;
mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use error::FetchError;
pub use http::Method;
pub use request::RequestBuilder;
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

/// Client for the storefront's HTTP API.
///
/// Clones share one transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// A client sending through [`ReqwestTransport`].
    pub fn http(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let transport = ReqwestTransport::new(timeout)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Resolve relative request paths against `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Send `key: value` with every request.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::GET, url)
    }

    /// Start a request. Absolute `http(s)://` URLs ignore the base URL.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let builder = RequestBuilder::new(method, self.resolve(url.into()));
        let builder = self
            .default_headers
            .iter()
            .fold(builder, |b, (key, value)| b.header(key.as_str(), value.as_str()));
        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }

    fn resolve(&self, url: String) -> String {
        let absolute = url.starts_with("http://") || url.starts_with("https://");
        match &self.base_url {
            Some(base) if !absolute => format!("{}{}", base.trim_end_matches('/'), url),
            _ => url,
        }
    }

    /// GET `url` and decode a 2xx JSON body.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies come
    /// back as the matching [`FetchError`] variant.
    pub async fn get_json<T: DeserializeOwned>(&self, url: impl Into<String>) -> Result<T, FetchError> {
        self.get(url)
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// A [`RequestBuilder`] paired with the transport that will send it.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    pub fn query(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|b| b.query(key, value))
    }

    pub fn header(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|b| b.header(key, value))
    }

    pub fn accept(self, media_type: impl Into<String>) -> Self {
        self.map(|b| b.accept(media_type))
    }

    fn map(mut self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        self.builder = f(self.builder);
        self
    }

    /// Send the request. Non-2xx replies are still `Ok`.
    pub async fn send(self) -> Result<Response, FetchError> {
        let method = self.builder.method().clone();
        let url = self.builder.full_url();
        debug!(%method, %url, "sending request");

        let result = self.transport.send(self.builder).await;
        match &result {
            Ok(response) => debug!(%method, %url, status = response.status, "response received"),
            Err(e) => warn!(%method, %url, error = %e, "request failed"),
        }
        result
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response, Transport};
}

#[cfg(test)]
mod tests {
    use super::testing::MockTransport;
    use super::*;

    fn client(mock: &Arc<MockTransport>) -> FetchClient {
        FetchClient::new(mock.clone()).with_base_url("https://api.test/")
    }

    #[tokio::test]
    async fn test_base_url_is_prepended() {
        let mock = Arc::new(MockTransport::new());
        mock.json("https://api.test/api/v1/categories", 200, &Vec::<u32>::new());

        let body: Vec<u32> = client(&mock).get_json("/api/v1/categories").await.unwrap();

        assert!(body.is_empty());
        mock.expect_one(Method::GET, "https://api.test/api/v1/categories");
    }

    #[tokio::test]
    async fn test_absolute_url_bypasses_base() {
        let mock = Arc::new(MockTransport::new());
        mock.text("https://other.test/ping", 200, "pong");

        let resp = client(&mock).get("https://other.test/ping").send().await.unwrap();

        assert_eq!(resp.text().unwrap(), "pong");
    }

    #[tokio::test]
    async fn test_default_headers_are_sent() {
        let mock = Arc::new(MockTransport::new());
        mock.text("https://api.test/x", 200, "");

        let client = client(&mock).with_default_header("X-Store", "main");
        client.get("/x").send().await.unwrap();

        let sent = mock.expect_one(Method::GET, "https://api.test/x");
        assert_eq!(sent.headers.get("X-Store").map(String::as_str), Some("main"));
    }

    #[tokio::test]
    async fn test_get_json_surfaces_http_error_unchanged() {
        let mock = Arc::new(MockTransport::new());
        mock.text("https://api.test/api/v1/products/999", 404, "Product not found");

        let err = client(&mock)
            .get_json::<serde_json::Value>("/api/v1/products/999")
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::http(404, "Product not found"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mock = Arc::new(MockTransport::new());
        mock.fail(
            "https://api.test/api/v1/categories",
            FetchError::RequestError("Network error".into()),
        );

        let err = client(&mock)
            .get_json::<Vec<u32>>("/api/v1/categories")
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::RequestError("Network error".into()));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let mock = Arc::new(MockTransport::new());
        mock.text("https://api.test/api/v1/categories", 200, "{not json");

        let err = client(&mock)
            .get_json::<Vec<u32>>("/api/v1/categories")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::ParseError(_)));
    }
}
