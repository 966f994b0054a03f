//! Header, cart badge and side cart.

use std::rc::Rc;

use shop_commerce::{CartItem, CartStore};
use shop_reactive::{Subscription, Toggle};

use crate::filters::html_escape;
use crate::view::View;

/// Item count shown on the cart button.
#[derive(Debug, Clone)]
pub struct CartBadge {
    cart: CartStore,
}

impl CartBadge {
    pub fn new(cart: CartStore) -> Self {
        Self { cart }
    }

    pub fn count(&self) -> usize {
        self.cart.len()
    }
}

impl View for CartBadge {
    fn render(&self) -> String {
        format!(
            r#"<span class="cart-badge bg-black text-white" data-testid="cart-count">{}</span>"#,
            self.count()
        )
    }

    fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
        vec![self.cart.subscribe(move |_| on_change())]
    }
}

/// Slide-over panel listing the cart contents and total.
#[derive(Debug, Clone)]
pub struct SideCart {
    cart: CartStore,
    hidden: Toggle,
}

impl SideCart {
    /// A side cart that starts hidden.
    pub fn new(cart: CartStore) -> Self {
        Self {
            cart,
            hidden: Toggle::new(true),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }

    /// Flip between hidden and shown.
    pub fn toggle(&self) -> bool {
        self.hidden.toggle()
    }
}

impl View for SideCart {
    fn render(&self) -> String {
        let items: String = self.cart.cart().iter().map(render_cart_item).collect();
        let hidden = if self.is_hidden() { " hidden" } else { "" };

        format!(
            r#"<aside class="side-cart{hidden}" data-section="side-cart">
    <h2>My Cart</h2>
    <ul class="side-cart-items">
        {items}
    </ul>
    <p class="side-cart-total" data-testid="cart-total">Total: {total}</p>
</aside>"#,
            hidden = hidden,
            items = items,
            total = self.cart.total()
        )
    }

    fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
        let on_cart = on_change.clone();
        vec![
            self.cart.subscribe(move |_| on_cart()),
            self.hidden.subscribe(move |_| on_change()),
        ]
    }
}

fn render_cart_item(item: &CartItem) -> String {
    let image = match item.cover() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="side-cart-image">"#,
            html_escape(src),
            html_escape(&item.title)
        ),
        None => String::new(),
    };
    format!(
        r#"<li class="side-cart-item">
            {image}
            <p class="side-cart-title">{title}</p>
            <p class="side-cart-price">{price}</p>
        </li>"#,
        image = image,
        title = html_escape(&item.title),
        price = item.price
    )
}

/// Top navigation bar.
///
/// The main menu starts collapsed and the side cart starts hidden; the two
/// toggles are independent of each other.
#[derive(Debug, Clone)]
pub struct Header {
    cart: CartStore,
    badge: CartBadge,
    side_cart: SideCart,
    menu: Toggle,
}

impl Header {
    pub fn new(cart: CartStore) -> Self {
        Self {
            badge: CartBadge::new(cart.clone()),
            side_cart: SideCart::new(cart.clone()),
            menu: Toggle::new(false),
            cart,
        }
    }

    pub fn cart(&self) -> Rc<Vec<CartItem>> {
        self.cart.cart()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn hide_side_menu(&self) -> bool {
        self.side_cart.is_hidden()
    }

    pub fn show_menu(&self) -> bool {
        self.menu.get()
    }

    pub fn toggle_menu(&self) {
        self.menu.toggle();
    }

    pub fn toggle_side_menu(&self) {
        self.side_cart.toggle();
    }

    pub fn badge(&self) -> &CartBadge {
        &self.badge
    }

    pub fn side_cart(&self) -> &SideCart {
        &self.side_cart
    }
}

impl View for Header {
    fn render(&self) -> String {
        let menu_hidden = if self.show_menu() { "" } else { " hidden" };

        format!(
            r#"<header class="site-header">
    <nav>
        <button type="button" data-collapse-toggle="navbar-default" aria-controls="navbar-default" aria-expanded="{expanded}">Menu</button>
        <div class="flex-col items-center{menu_hidden}" id="navbar-default">
            <a href="/">All</a>
            <a href="/about">About</a>
        </div>
        <button type="button" class="cart-button" data-testid="cart-button">{badge}</button>
    </nav>
    {side_cart}
</header>"#,
            expanded = self.show_menu(),
            menu_hidden = menu_hidden,
            badge = self.badge.render(),
            side_cart = self.side_cart.render()
        )
    }

    // Bound to the cart once; the badge and side cart are rendered inline.
    fn bind(&self, on_change: Rc<dyn Fn()>) -> Vec<Subscription> {
        let on_cart = on_change.clone();
        let on_side = on_change.clone();
        vec![
            self.cart.subscribe(move |_| on_cart()),
            self.side_cart.hidden.subscribe(move |_| on_side()),
            self.menu.subscribe(move |_| on_change()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::LiveView;
    use shop_commerce::testing::ProductFixture;

    #[test]
    fn test_initial_state() {
        let header = Header::new(CartStore::new());
        assert!(header.hide_side_menu());
        assert!(!header.show_menu());
        assert!(header.cart().is_empty());
        assert_eq!(header.total(), 0.0);
    }

    #[test]
    fn test_toggle_menu() {
        let header = Header::new(CartStore::new());

        header.toggle_menu();
        assert!(header.show_menu());

        header.toggle_menu();
        assert!(!header.show_menu());
    }

    #[test]
    fn test_toggle_side_menu() {
        let header = Header::new(CartStore::new());

        header.toggle_side_menu();
        assert!(!header.hide_side_menu());

        header.toggle_side_menu();
        assert!(header.hide_side_menu());
    }

    #[test]
    fn test_toggles_independent() {
        let header = Header::new(CartStore::new());
        header.toggle_menu();
        assert!(header.hide_side_menu());
    }

    #[test]
    fn test_menu_container_hidden_class() {
        let header = Header::new(CartStore::new());
        assert!(header.render().contains(r#"class="flex-col items-center hidden""#));

        header.toggle_menu();
        assert!(header.render().contains(r#"class="flex-col items-center""#));
    }

    #[test]
    fn test_badge_counts_items() {
        let cart = CartStore::new();
        let header = Header::new(cart.clone());

        cart.add_to_cart(ProductFixture::new().build());
        cart.add_to_cart(ProductFixture::new().build());

        assert_eq!(header.badge().count(), 2);
        assert!(header.render().contains(r#"data-testid="cart-count">2</span>"#));
    }

    #[test]
    fn test_reflects_cart_updates() {
        let cart = CartStore::new();
        let header = Header::new(cart.clone());
        let product = ProductFixture::new().price(150.0).build();

        cart.add_to_cart(product.clone());

        assert_eq!(header.cart().as_slice(), &[product]);
        assert_eq!(header.total(), 150.0);
    }

    #[test]
    fn test_side_cart_total() {
        let cart = CartStore::new();
        let side_cart = SideCart::new(cart.clone());

        cart.add_to_cart(ProductFixture::new().price(100.0).build());
        cart.add_to_cart(ProductFixture::new().price(200.0).build());

        assert!(side_cart.render().contains("Total: 300</p>"));
    }

    #[test]
    fn test_side_cart_item_without_image() {
        let cart = CartStore::new();
        let side_cart = SideCart::new(cart.clone());

        cart.add_to_cart(ProductFixture::new().images(Vec::<String>::new()).build());

        assert!(!side_cart.render().contains("<img"));
    }

    #[test]
    fn test_live_header_rerenders_once_per_add() {
        let cart = CartStore::new();
        let live = LiveView::mount(Header::new(cart.clone()));

        cart.add_to_cart(ProductFixture::new().price(5.0).build());

        assert_eq!(live.render_count(), 2);
        assert!(live.html().contains("Total: 5</p>"));
    }

    #[test]
    fn test_live_header_rerenders_on_toggle() {
        let live = LiveView::mount(Header::new(CartStore::new()));

        live.view().toggle_side_menu();

        assert_eq!(live.render_count(), 2);
        assert!(live.html().contains(r#"class="side-cart""#));
    }
}
