//! Catalog access over the storefront HTTP API.
//!
//! Thin request/response wrappers: every failure is the underlying
//! [`FetchError`], returned to the caller untouched.

use std::fmt;

use shop_data::{FetchClient, FetchError};
use tracing::debug;

use crate::catalog::{Category, Product};

const PRODUCTS_PATH: &str = "/api/v1/products";
const CATEGORIES_PATH: &str = "/api/v1/categories";

/// Optional filters for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Sent as the `categoryId` query parameter.
    pub category_id: Option<String>,
    /// Sent as the `categorySlug` query parameter.
    pub category_slug: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_id(mut self, id: impl fmt::Display) -> Self {
        self.category_id = Some(id.to_string());
        self
    }

    pub fn category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.category_slug.is_none()
    }
}

/// Client for products and categories.
#[derive(Clone)]
pub struct CatalogClient {
    http: FetchClient,
}

impl CatalogClient {
    /// Wrap a fetch client already pointed at the API base URL.
    pub fn new(http: FetchClient) -> Self {
        Self { http }
    }

    /// Fetch one product by id. The id is placed in the path verbatim.
    pub async fn get_one(&self, id: impl fmt::Display) -> Result<Product, FetchError> {
        debug!(%id, "fetching product");
        self.http.get_json(format!("{}/{}", PRODUCTS_PATH, id)).await
    }

    /// Fetch one product by slug. The slug is placed in the path verbatim.
    pub async fn get_one_by_slug(&self, slug: &str) -> Result<Product, FetchError> {
        debug!(slug, "fetching product by slug");
        self.http
            .get_json(format!("{}/slug/{}", PRODUCTS_PATH, slug))
            .await
    }

    /// List products, optionally narrowed to one category.
    pub async fn get_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, FetchError> {
        let mut request = self.http.get(PRODUCTS_PATH).accept("application/json");
        if let Some(id) = &filter.category_id {
            request = request.query("categoryId", id.as_str());
        }
        if let Some(slug) = &filter.category_slug {
            request = request.query("categorySlug", slug.as_str());
        }

        let products: Vec<Product> = request.send().await?.error_for_status()?.json()?;
        debug!(count = products.len(), ?filter, "fetched products");
        Ok(products)
    }

    /// Products related to the one identified by `slug`.
    pub async fn get_related_products(&self, slug: &str) -> Result<Vec<Product>, FetchError> {
        let related: Vec<Product> = self
            .http
            .get_json(format!("{}/slug/{}/related", PRODUCTS_PATH, slug))
            .await?;
        debug!(slug, count = related.len(), "fetched related products");
        Ok(related)
    }

    /// Every category in the catalog.
    pub async fn get_all_categories(&self) -> Result<Vec<Category>, FetchError> {
        let categories: Vec<Category> = self.http.get_json(CATEGORIES_PATH).await?;
        debug!(count = categories.len(), "fetched categories");
        Ok(categories)
    }
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}
