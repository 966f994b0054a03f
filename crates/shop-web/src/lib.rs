//! Server-rendered storefront views for Shopfront.
//!
//! Every view renders to an HTML string from shared reactive state. Views
//! built from one [`Session`] share its [`CartStore`](shop_commerce::CartStore),
//! and a [`LiveView`] re-renders whenever the state it is bound to changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_web::prelude::*;
//!
//! let session = Session::new(catalog, SiteMeta::default());
//! let header = LiveView::mount(session.header());
//!
//! let detail = session.product_detail("handmade-fresh-table");
//! detail.load().await?;
//! detail.add_to_cart();
//!
//! assert!(header.html().contains("Total: "));
//! ```

pub mod filters;
pub mod header;
pub mod meta;
pub mod product_card;
pub mod product_detail;
pub mod product_list;
pub mod session;
pub mod view;

pub use header::{CartBadge, Header, SideCart};
pub use meta::{DocumentHead, HeadSink, MetaTags, PageMeta, SiteMeta};
pub use product_card::ProductCard;
pub use product_detail::ProductDetail;
pub use product_list::ProductList;
pub use session::Session;
pub use view::{LiveView, View};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::header::{CartBadge, Header, SideCart};
    pub use crate::meta::{MetaTags, PageMeta, SiteMeta};
    pub use crate::product_detail::ProductDetail;
    pub use crate::product_list::ProductList;
    pub use crate::session::Session;
    pub use crate::view::{LiveView, View};
}
