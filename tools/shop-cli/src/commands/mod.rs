//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only products in this category id.
    #[arg(long)]
    pub category_id: Option<String>,

    /// Only products in this category slug.
    #[arg(long)]
    pub category_slug: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug.
    pub slug: String,

    /// Print the rendered page instead of a summary.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add products to a session cart and show it
    Add {
        /// Product slugs, added in order.
        #[arg(required = true)]
        slugs: Vec<String>,

        /// Print the rendered header instead of a summary.
        #[arg(long)]
        html: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default shop.toml
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
