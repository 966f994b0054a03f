//! Product listing command.

use anyhow::Result;
use shop_commerce::ProductFilter;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{format_price, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut filter = ProductFilter::new();
    if let Some(id) = args.category_id {
        filter = filter.category_id(id);
    }
    if let Some(slug) = args.category_slug {
        filter = filter.category_slug(slug);
    }

    let catalog = ctx.catalog()?;
    let spinner = ctx.output.spinner("Fetching products...");
    let result = catalog.get_products(&filter).await;
    spinner.finish_and_clear();
    let products = result?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let widths = [6, 40, 10, 30];
    ctx.output.table_row(&["ID", "TITLE", "PRICE", "SLUG"], &widths);
    for product in &products {
        let id = product.id.to_string();
        let title = truncate(&product.title, 40);
        let price = format_price(product.price);
        ctx.output.table_row(
            &[id.as_str(), title.as_str(), price.as_str(), product.slug.as_str()],
            &widths,
        );
    }

    Ok(())
}
