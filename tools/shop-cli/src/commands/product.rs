//! Product detail command.

use anyhow::Result;
use serde_json::json;
use shop_web::View;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{format_price, truncate};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let detail = session.product_detail(&args.slug);

    let spinner = ctx.output.spinner(&format!("Fetching {}...", args.slug));
    let result = detail.load().await;
    spinner.finish_and_clear();
    result?;

    if args.html {
        ctx.output.raw(&session.head().render());
        ctx.output.raw(&detail.render());
        return Ok(());
    }

    let Some(product) = detail.product() else {
        return Ok(());
    };
    let related = detail.related();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "related": *related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("slug", &product.slug);
    ctx.output.kv("price", &format_price(product.price));
    ctx.output.kv("category", &product.category.name);
    if let Some(created) = product.creation_at {
        ctx.output.kv("created", &created.format("%Y-%m-%d").to_string());
    }
    if let Some(cover) = detail.cover() {
        ctx.output.kv("cover", &cover);
    }
    if !product.description.is_empty() {
        ctx.output.kv("description", &truncate(&product.description, 120));
    }

    ctx.output.header(&format!("Related ({})", related.len()));
    for item in related.iter() {
        ctx.output.list_item(&format!(
            "{} ({}) {}",
            item.title,
            format_price(item.price),
            item.slug
        ));
    }

    Ok(())
}
