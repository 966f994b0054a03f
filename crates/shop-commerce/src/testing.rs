//! Deterministic product and category fixtures for tests.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::catalog::{Category, Product};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Builder for fake products.
///
/// Each fixture takes the next id from a process-wide counter, so two
/// default fixtures never compare equal.
#[derive(Debug, Clone)]
pub struct ProductFixture {
    product: Product,
}

impl ProductFixture {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let mut product = Product::new(
            id,
            format!("Test Product {}", id),
            10.0,
            Self::category(1),
            format!("test-product-{}", id),
        );
        product.description = format!("Description for product {}", id);
        product.images = vec![
            format!("https://placehold.co/600x400?text={}-1", id),
            format!("https://placehold.co/600x400?text={}-2", id),
        ];
        Self { product }
    }

    /// A category with a derived name and slug.
    pub fn category(id: i64) -> Category {
        let mut category = Category::new(id, format!("Category {}", id), format!("category-{}", id));
        category.image = format!("https://placehold.co/200x200?text=c{}", id);
        category
    }

    pub fn id(mut self, id: i64) -> Self {
        self.product.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.product.title = title.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.product.price = price;
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.product.slug = slug.into();
        self
    }

    pub fn images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.product.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.product.category = category;
        self
    }

    pub fn build(self) -> Product {
        self.product
    }
}

impl Default for ProductFixture {
    fn default() -> Self {
        Self::new()
    }
}
