//! Per-session wiring.

use std::rc::Rc;

use shop_commerce::{CartStore, CatalogClient};

use crate::header::Header;
use crate::meta::{DocumentHead, MetaTags, SiteMeta};
use crate::product_detail::ProductDetail;
use crate::product_list::ProductList;

/// Everything one storefront session shares: a single cart, the catalog
/// client and the document head.
///
/// Views are built from the session, so every view holds a handle to the
/// same [`CartStore`].
#[derive(Debug, Clone)]
pub struct Session {
    cart: CartStore,
    catalog: CatalogClient,
    head: DocumentHead,
    meta: MetaTags,
}

impl Session {
    pub fn new(catalog: CatalogClient, site: SiteMeta) -> Self {
        let head = DocumentHead::new();
        let meta = MetaTags::new(Rc::new(head.clone()), site);
        Self {
            cart: CartStore::new(),
            catalog,
            head,
            meta,
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    pub fn meta(&self) -> &MetaTags {
        &self.meta
    }

    pub fn header(&self) -> Header {
        Header::new(self.cart.clone())
    }

    pub fn product_list(&self, category_slug: Option<&str>) -> ProductList {
        let list = ProductList::new(self.catalog.clone(), self.cart.clone());
        match category_slug {
            Some(slug) => list.with_category_slug(slug),
            None => list,
        }
    }

    pub fn product_detail(&self, slug: impl Into<String>) -> ProductDetail {
        ProductDetail::new(slug, self.catalog.clone(), self.cart.clone(), self.meta.clone())
    }
}
