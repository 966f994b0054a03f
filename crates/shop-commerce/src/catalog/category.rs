//! Category read model.

use serde::{Deserialize, Serialize};

/// A product category as served by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category image URL.
    #[serde(default)]
    pub image: String,
    /// URL-friendly slug.
    pub slug: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            slug: slug.into(),
        }
    }
}
