//! Product detail page with gallery and related products.

use std::rc::Rc;

use shop_commerce::{CartStore, CatalogClient, Product};
use shop_data::FetchError;
use shop_reactive::{Observable, Subscription};
use tracing::{debug, info};

use crate::filters::html_escape;
use crate::meta::{MetaTags, PageMeta};
use crate::product_card::ProductCard;
use crate::view::View;

/// Detail page for the product identified by a slug.
pub struct ProductDetail {
    slug: String,
    catalog: CatalogClient,
    cart: CartStore,
    meta: MetaTags,
    product: Observable<Option<Product>>,
    related: Observable<Rc<Vec<Product>>>,
    cover: Observable<Option<String>>,
}

impl ProductDetail {
    pub fn new(
        slug: impl Into<String>,
        catalog: CatalogClient,
        cart: CartStore,
        meta: MetaTags,
    ) -> Self {
        Self {
            slug: slug.into(),
            catalog,
            cart,
            meta,
            product: Observable::new(None),
            related: Observable::new(Rc::new(Vec::new())),
            cover: Observable::new(None),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Fetch the product and its related products concurrently.
    ///
    /// The cover resets to the first image and the page meta tags are
    /// updated from the product. Errors are returned unchanged.
    pub async fn load(&self) -> Result<(), FetchError> {
        let (product, related) = futures::join!(
            self.catalog.get_one_by_slug(&self.slug),
            self.catalog.get_related_products(&self.slug)
        );
        let product = product?;
        let related = related?;
        info!(slug = %self.slug, related = related.len(), "product detail loaded");

        self.meta.update_meta_tags(self.page_meta(&product));
        self.cover.set(product.cover().map(str::to_string));
        self.related.set(Rc::new(related));
        self.product.set(Some(product));
        Ok(())
    }

    fn page_meta(&self, product: &Product) -> PageMeta {
        let url = format!(
            "{}/product/{}",
            self.meta.site().url.trim_end_matches('/'),
            product.slug
        );
        let mut page = PageMeta::new()
            .title(product.title.clone())
            .description(product.description.clone())
            .url(url);
        if let Some(cover) = product.cover() {
            page = page.image(cover);
        }
        page
    }

    pub fn product(&self) -> Option<Product> {
        self.product.get()
    }

    pub fn related(&self) -> Rc<Vec<Product>> {
        self.related.get()
    }

    /// The image currently shown as the gallery cover.
    pub fn cover(&self) -> Option<String> {
        self.cover.get()
    }

    /// Show `url` as the cover. The cart is untouched.
    pub fn change_cover(&self, url: impl Into<String>) {
        let url = url.into();
        debug!(slug = %self.slug, cover = %url, "cover changed");
        self.cover.set(Some(url));
    }

    /// Add the loaded product to the cart. Returns false before `load`.
    pub fn add_to_cart(&self) -> bool {
        match self.product.get() {
            Some(product) => {
                self.cart.add_to_cart(product);
                true
            }
            None => false,
        }
    }

    /// Cards for the related products, each adding to the session cart.
    pub fn related_cards(&self) -> Vec<ProductCard> {
        self.related
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
}

impl View for ProductDetail {
    fn render(&self) -> String {
        let Some(product) = self.product.get() else {
            return r#"<section class="product-detail product-detail--loading" data-section="product">
    <p class="product-loading">Loading product...</p>
</section>"#
                .to_string();
        };

        let cover = self
            .cover()
            .map(|src| {
                format!(
                    r#"<img src="{}" alt="{}" class="product-cover" data-testid="cover">"#,
                    html_escape(&src),
                    html_escape(&product.title)
                )
            })
            .unwrap_or_default();

        let thumbnails: String = product
            .images
            .iter()
            .map(|src| {
                format!(
                    r#"<button type="button" class="product-thumbnail"><img src="{src}" alt=""></button>"#,
                    src = html_escape(src)
                )
            })
            .collect();

        let related: String = self.related_cards().iter().map(View::render).collect();

        format!(
            r#"<section class="product-detail" data-section="product">
    <div class="product-gallery">
        {cover}
        <div class="product-thumbnails">{thumbnails}</div>
    </div>
    <div class="product-info">
        <h1 class="product-title">{title}</h1>
        <p class="product-price">${price:.2}</p>
        <p class="product-description">{description}</p>
        <button type="button" class="product-add" data-testid="add-to-cart-button">Add to cart</button>
    </div>
</section>
<section class="product-related" data-section="related">
    <h2>Related products</h2>
    <div class="product-grid">{related}</div>
</section>"#,
            cover = cover,
            thumbnails = thumbnails,
            title = html_escape(&product.title),
            price = product.price,
            description = html_escape(&product.description),
            related = related
        )
    }

    fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
        let on_product = on_change.clone();
        let on_related = on_change.clone();
        vec![
            self.product.subscribe(move |_| on_product()),
            self.related.subscribe(move |_| on_related()),
            self.cover.subscribe(move |_| on_change()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{DocumentHead, SiteMeta};
    use shop_commerce::testing::ProductFixture;
    use shop_data::testing::MockTransport;
    use shop_data::FetchClient;
    use std::sync::Arc;

    const API: &str = "https://api.test";

    struct Fixture {
        mock: Arc<MockTransport>,
        cart: CartStore,
        head: DocumentHead,
        product: Product,
    }

    impl Fixture {
        fn new() -> Self {
            let product = ProductFixture::new()
                .slug("test-product")
                .images(["https://img.test/1.png", "https://img.test/2.png"])
                .build();
            let mock = Arc::new(MockTransport::new());
            mock.json(format!("{}/api/v1/products/slug/test-product", API), 200, &product);
            mock.json(
                format!("{}/api/v1/products/slug/test-product/related", API),
                200,
                &vec![ProductFixture::new().build()],
            );
            Self {
                mock,
                cart: CartStore::new(),
                head: DocumentHead::new(),
                product,
            }
        }

        fn detail(&self) -> ProductDetail {
            let catalog = CatalogClient::new(FetchClient::new(self.mock.clone()).with_base_url(API));
            let meta = MetaTags::new(Rc::new(self.head.clone()), SiteMeta::default());
            ProductDetail::new("test-product", catalog, self.cart.clone(), meta)
        }
    }

    #[tokio::test]
    async fn test_load_product_and_related() {
        let fx = Fixture::new();
        let detail = fx.detail();

        detail.load().await.unwrap();

        assert_eq!(detail.product(), Some(fx.product.clone()));
        assert_eq!(detail.related().len(), 1);
    }

    #[tokio::test]
    async fn test_cover_is_first_image() {
        let fx = Fixture::new();
        let detail = fx.detail();

        detail.load().await.unwrap();

        assert_eq!(detail.cover().as_deref(), Some("https://img.test/1.png"));
        assert!(detail
            .render()
            .contains(r#"<img src="https://img.test/1.png" alt=""#));
        assert!(detail.render().contains(r#"data-testid="cover""#));
    }

    #[tokio::test]
    async fn test_change_cover_leaves_cart_alone() {
        let fx = Fixture::new();
        let detail = fx.detail();
        detail.load().await.unwrap();

        detail.change_cover("https://img.test/2.png");

        assert_eq!(detail.cover().as_deref(), Some("https://img.test/2.png"));
        assert!(fx.cart.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart() {
        let fx = Fixture::new();
        let detail = fx.detail();
        assert!(!detail.add_to_cart());

        detail.load().await.unwrap();

        assert!(detail.add_to_cart());
        assert_eq!(fx.cart.cart().as_slice(), &[fx.product.clone()]);
    }

    #[tokio::test]
    async fn test_updates_meta_tags() {
        let fx = Fixture::new();
        let detail = fx.detail();

        detail.load().await.unwrap();

        assert_eq!(fx.head.title(), Some(fx.product.title.clone()));
        assert_eq!(fx.head.tag("og:image").as_deref(), Some("https://img.test/1.png"));
        assert_eq!(
            fx.head.tag("og:url").as_deref(),
            Some("http://localhost:4200/product/test-product")
        );
    }

    #[tokio::test]
    async fn test_load_not_found() {
        let mock = Arc::new(MockTransport::new());
        mock.text(format!("{}/api/v1/products/slug/missing", API), 404, "Product not found");
        mock.json(
            format!("{}/api/v1/products/slug/missing/related", API),
            200,
            &Vec::<Product>::new(),
        );
        let catalog = CatalogClient::new(FetchClient::new(mock.clone()).with_base_url(API));
        let meta = MetaTags::new(Rc::new(DocumentHead::new()), SiteMeta::default());
        let detail = ProductDetail::new("missing", catalog, CartStore::new(), meta);

        let err = detail.load().await.unwrap_err();

        assert_eq!(err, FetchError::http(404, "Product not found"));
        assert!(detail.product().is_none());
        assert!(detail.render().contains("Loading product..."));
    }

    #[tokio::test]
    async fn test_related_card_adds_to_cart() {
        let fx = Fixture::new();
        let detail = fx.detail();
        detail.load().await.unwrap();

        detail.related_cards()[0].add_to_cart_handler();

        assert_eq!(fx.cart.len(), 1);
    }
}
