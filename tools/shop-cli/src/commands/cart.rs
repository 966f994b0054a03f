//! Session cart command.

use anyhow::Result;
use futures::future::try_join_all;
use serde_json::json;
use shop_web::LiveView;
use tracing::debug;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::format_price;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Add { slugs, html } => add(&slugs, html, ctx).await,
    }
}

async fn add(slugs: &[String], html: bool, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;
    let header = LiveView::mount(session.header());

    let spinner = ctx
        .output
        .spinner(&format!("Fetching {} product(s)...", slugs.len()));
    let result = try_join_all(
        slugs
            .iter()
            .map(|slug| session.catalog().get_one_by_slug(slug)),
    )
    .await;
    spinner.finish_and_clear();

    for product in result? {
        ctx.output.debug(&format!("Adding {}", product.slug));
        session.cart().add_to_cart(product);
    }
    debug!(renders = header.render_count(), "header updated");

    if html {
        ctx.output.raw(&header.html());
        return Ok(());
    }

    let cart = session.cart();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "count": cart.len(),
            "items": *cart.cart(),
            "total": cart.total(),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({})", header.view().badge().count()));
    for item in header.view().cart().iter() {
        ctx.output
            .list_item(&format!("{} {}", item.title, format_price(item.price)));
    }
    ctx.output.kv("Total", &format_price(header.view().total()));

    Ok(())
}
