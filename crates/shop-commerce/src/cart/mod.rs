//! Session cart module.
//!
//! One [`CartStore`] per session, shared by handle with every consumer.

mod store;

pub use store::{CartItem, CartStore};
