//! The session cart store.

use std::fmt;
use std::rc::Rc;

use shop_reactive::{Computed, Observable, Subscription};
use tracing::debug;

use crate::catalog::Product;

/// A product captured at the moment it was added to the cart.
pub type CartItem = Product;

/// Single source of truth for cart contents and their total.
///
/// Cloning returns another handle to the same store, so every consumer
/// built from one session sees every mutation immediately. Items are only
/// ever appended; duplicates are kept as separate entries.
#[derive(Clone)]
pub struct CartStore {
    items: Observable<Rc<Vec<CartItem>>>,
    total: Computed<Rc<Vec<CartItem>>, f64>,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let items = Observable::new(Rc::new(Vec::new()));
        let total = Computed::new(&items, |items: &Rc<Vec<CartItem>>| sum_prices(items));
        Self { items, total }
    }

    /// Append `item` to the end of the cart.
    ///
    /// Snapshots returned by [`cart`](Self::cart) never change. The
    /// sequence is copied only while such a snapshot is still held;
    /// otherwise the push goes straight into the stored vector.
    pub fn add_to_cart(&self, item: CartItem) {
        let id = item.id;
        let mut len = 0;
        self.items.modify(|items| {
            let items = Rc::make_mut(items);
            items.push(item);
            len = items.len();
        });
        debug!(id, len, "added to cart");
    }

    /// Current cart contents in insertion order.
    pub fn cart(&self) -> Rc<Vec<CartItem>> {
        self.items.get()
    }

    /// Sum of `price` across the current contents. `0.0` when empty.
    pub fn total(&self) -> f64 {
        self.total.get()
    }

    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of completed mutations.
    pub fn version(&self) -> u64 {
        self.items.version()
    }

    /// Call `callback` with the new contents after every mutation.
    pub fn subscribe(&self, callback: impl Fn(&[CartItem]) + 'static) -> Subscription {
        self.items.subscribe(move |items| callback(items.as_slice()))
    }

    /// True when both handles point at the same store.
    pub fn same_store(&self, other: &Self) -> bool {
        self.items.ptr_eq(&other.items)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("len", &self.len())
            .field("total", &self.total())
            .field("version", &self.version())
            .finish()
    }
}

// Plain left-to-right accumulation from 0.0, no rounding.
fn sum_prices(items: &[CartItem]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.price)
}
