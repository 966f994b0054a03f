//! Product read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// A product as served by the catalog API.
///
/// Prices are plain floating-point values with no currency or rounding
/// policy attached; zero and negative prices are passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Product title.
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Image URLs, cover first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Creation time reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_at: Option<DateTime<Utc>>,
    /// Owning category.
    pub category: Category,
    /// URL-friendly slug.
    pub slug: String,
}

impl Product {
    /// Create a product with no description, images or creation time.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        price: f64,
        category: Category,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            images: Vec::new(),
            creation_at: None,
            category,
            slug: slug.into(),
        }
    }

    /// The cover image (first image), if any.
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
