//! Product card used in listings and related-product grids.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use shop_commerce::Product;
use shop_reactive::Subscription;

use crate::filters::html_escape;
use crate::view::View;

type AddToCartListener = Rc<dyn Fn(&Product)>;

/// A single product tile with an add-to-cart button.
pub struct ProductCard {
    product: Product,
    on_add: RefCell<Option<AddToCartListener>>,
}

impl ProductCard {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            on_add: RefCell::new(None),
        }
    }

    /// Register the add-to-cart listener, replacing any previous one.
    pub fn on_add_to_cart(&self, listener: impl Fn(&Product) + 'static) {
        *self.on_add.borrow_mut() = Some(Rc::new(listener));
    }

    /// Emit this card's product to the listener.
    pub fn add_to_cart_handler(&self) {
        let listener = self.on_add.borrow().clone();
        if let Some(listener) = listener {
            listener(&self.product);
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }
}

impl fmt::Debug for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductCard")
            .field("product", &self.product.slug)
            .field("has_listener", &self.on_add.borrow().is_some())
            .finish()
    }
}

impl View for ProductCard {
    fn render(&self) -> String {
        let image = self
            .product
            .cover()
            .map(|src| {
                format!(
                    r#"<img src="{}" alt="{}" class="product-card-image">"#,
                    html_escape(src),
                    html_escape(&self.product.title)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<article class="product-card">
    <a href="/product/{slug}" class="product-card-link">
        {image}
        <h3 class="product-card-title" data-testid="product-title">{title}</h3>
    </a>
    <p class="product-card-price">${price:.2}</p>
    <button type="button" class="product-card-add" data-testid="add-to-cart-button">Add to cart</button>
</article>"#,
            slug = html_escape(&self.product.slug),
            image = image,
            title = html_escape(&self.product.title),
            price = self.product.price
        )
    }

    fn bind(&self, _on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::testing::ProductFixture;
    use std::cell::RefCell;

    #[test]
    fn test_renders_title() {
        let product = ProductFixture::new().title("Classic Tee").build();
        let html = ProductCard::new(product).render();
        assert!(html.contains(r#"data-testid="product-title">Classic Tee</h3>"#));
        assert!(html.contains(r#"data-testid="add-to-cart-button""#));
    }

    #[test]
    fn test_escapes_title() {
        let product = ProductFixture::new().title("<b>Bold</b>").build();
        let html = ProductCard::new(product).render();
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }

    #[test]
    fn test_emits_product_once() {
        let product = ProductFixture::new().build();
        let card = ProductCard::new(product.clone());
        let emitted = Rc::new(RefCell::new(Vec::new()));
        card.on_add_to_cart({
            let emitted = emitted.clone();
            move |p| emitted.borrow_mut().push(p.clone())
        });

        card.add_to_cart_handler();

        assert_eq!(*emitted.borrow(), vec![product]);
    }

    #[test]
    fn test_handler_without_listener() {
        let card = ProductCard::new(ProductFixture::new().build());
        card.add_to_cart_handler();
    }
}
