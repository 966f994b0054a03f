//! Product catalog module.
//!
//! Read models for products and categories, and the client that fetches them.

mod category;
mod client;
mod product;

pub use category::Category;
pub use client::{CatalogClient, ProductFilter};
pub use product::Product;
