//! Category listing command.

use anyhow::Result;

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let spinner = ctx.output.spinner("Fetching categories...");
    let result = catalog.get_all_categories().await;
    spinner.finish_and_clear();
    let categories = result?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({})", categories.len()));
    let widths = [6, 30, 30];
    ctx.output.table_row(&["ID", "NAME", "SLUG"], &widths);
    for category in &categories {
        let id = category.id.to_string();
        ctx.output.table_row(
            &[id.as_str(), category.name.as_str(), category.slug.as_str()],
            &widths,
        );
    }

    Ok(())
}
