//! Catalog listing page.

use std::rc::Rc;

use shop_commerce::{CartStore, CatalogClient, Category, Product, ProductFilter};
use shop_data::FetchError;
use shop_reactive::{Observable, Subscription};
use tracing::info;

use crate::filters::html_escape;
use crate::product_card::ProductCard;
use crate::view::View;

/// Products of the catalog, optionally narrowed to one category.
pub struct ProductList {
    catalog: CatalogClient,
    cart: CartStore,
    category_slug: Option<String>,
    products: Observable<Rc<Vec<Product>>>,
    categories: Observable<Rc<Vec<Category>>>,
}

impl ProductList {
    pub fn new(catalog: CatalogClient, cart: CartStore) -> Self {
        Self {
            catalog,
            cart,
            category_slug: None,
            products: Observable::new(Rc::new(Vec::new())),
            categories: Observable::new(Rc::new(Vec::new())),
        }
    }

    /// Only list products in the category with this slug.
    pub fn with_category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Fetch categories and products together.
    ///
    /// On failure the previously loaded state is kept and the error is
    /// returned unchanged.
    pub async fn load(&self) -> Result<(), FetchError> {
        let mut filter = ProductFilter::new();
        if let Some(slug) = &self.category_slug {
            filter = filter.category_slug(slug.clone());
        }

        let (categories, products) = futures::join!(
            self.catalog.get_all_categories(),
            self.catalog.get_products(&filter)
        );
        let categories = categories?;
        let products = products?;
        info!(
            categories = categories.len(),
            products = products.len(),
            category = ?self.category_slug,
            "product list loaded"
        );

        self.categories.set(Rc::new(categories));
        self.products.set(Rc::new(products));
        Ok(())
    }

    pub fn products(&self) -> Rc<Vec<Product>> {
        self.products.get()
    }

    pub fn categories(&self) -> Rc<Vec<Category>> {
        self.categories.get()
    }

    /// One card per product, each adding its product to the session cart.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.products
            .get()
            .iter()
            .map(|product| {
                let card = ProductCard::new(product.clone());
                let cart = self.cart.clone();
                card.on_add_to_cart(move |product| cart.add_to_cart(product.clone()));
                card
            })
            .collect()
    }

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.add_to_cart(product.clone());
    }
}

impl View for ProductList {
    fn render(&self) -> String {
        let categories: String = self
            .categories
            .get()
            .iter()
            .map(|category| {
                let active = self.category_slug.as_deref() == Some(category.slug.as_str());
                format!(
                    r#"<a href="/category/{slug}" class="category-link{active}">{name}</a>"#,
                    slug = html_escape(&category.slug),
                    active = if active { " active" } else { "" },
                    name = html_escape(&category.name)
                )
            })
            .collect();

        let cards: String = self.cards().iter().map(View::render).collect();

        format!(
            r#"<section class="product-list" data-section="products">
    <nav class="category-nav">
        <a href="/" class="category-link">All</a>
        {categories}
    </nav>
    <div class="product-grid">
        {cards}
    </div>
</section>"#,
            categories = categories,
            cards = cards
        )
    }

    fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
        let on_products = on_change.clone();
        vec![
            self.products.subscribe(move |_| on_products()),
            self.categories.subscribe(move |_| on_change()),
        ]
    }
}
