//! Storefront domain for Shopfront.
//!
//! - **Catalog**: product and category read models, and [`CatalogClient`]
//!   for the catalog HTTP API
//! - **Cart**: the session [`CartStore`], shared by handle with every view
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let catalog = CatalogClient::new(FetchClient::http(None)?.with_base_url(api_url));
//! let product = catalog.get_one_by_slug("handmade-fresh-table").await?;
//!
//! let cart = CartStore::new();
//! let badge_view = cart.clone();
//!
//! cart.add_to_cart(product);
//! assert_eq!(badge_view.len(), 1);
//! println!("Total: {}", cart.total());
//! ```

pub mod cart;
pub mod catalog;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cart::{CartItem, CartStore};
pub use catalog::{CatalogClient, Category, Product, ProductFilter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartItem, CartStore};
    pub use crate::catalog::{CatalogClient, Category, Product, ProductFilter};
    pub use shop_data::{FetchClient, FetchError};
}
