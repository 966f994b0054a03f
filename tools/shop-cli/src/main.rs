//! Shop CLI - Command line storefront client.
//!
//! Commands:
//! - `shop products` - List products, optionally by category
//! - `shop product` - Show a product with its related products
//! - `shop categories` - List categories
//! - `shop cart add` - Add products to a session cart
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shop_observability::{LogLevel, LoggingConfig};

use commands::{CartArgs, ConfigArgs, ProductArgs, ProductsArgs};

/// Shop CLI - Browse the catalog and fill a cart from the terminal
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog API base URL (overrides config and SHOP_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show one product by slug
    Product(ProductArgs),

    /// List categories
    Categories,

    /// Work with a session cart
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.api_url.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let logging = if ctx.output.is_verbose() {
        LoggingConfig::new(LogLevel::Debug, ctx.config.logging.format)
    } else {
        ctx.config.logging.clone()
    };
    if let Err(e) = shop_observability::init(&logging) {
        ctx.output.warn(&e.to_string());
    }
    ctx.output.debug(&format!("API: {}", ctx.config.api.base_url));

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
