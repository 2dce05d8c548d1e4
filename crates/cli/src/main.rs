//! Atelier CLI - catalog and checkout tools.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, filtered and sorted like the storefront listing
//! atelier catalog list --search denim --sort price-low
//!
//! # Show one product
//! atelier catalog show 4
//!
//! # What would the cart page show for these adds?
//! atelier cart summary 4 7 12
//!
//! # Preview the processor payload for a checkout body
//! atelier checkout preview order.json --base-url https://shop.example.com
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Filter and sort the built-in catalog
//! - `catalog show` - Display a single product
//! - `cart summary` - Summarise a cart offline
//! - `checkout preview` - Shape a checkout body offline

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use atelier_core::{CurrencyCode, ProductId};
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about = "Atelier CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Summarise carts offline
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Work with checkout payloads
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Case-insensitive search on title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Category slug (`ladies`, `mens`, `shoes`, `bags`, `home`, `gifts`) or `all`
        #[arg(short, long)]
        category: Option<String>,

        /// Sort key (`featured`, `price-low`, `price-high`, `rating`)
        #[arg(long)]
        sort: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single product
    Show {
        /// Product id
        id: ProductId,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show lines and total for a cart
    Summary {
        /// Product ids, added in order
        #[arg(required_unless_present = "raw")]
        ids: Vec<ProductId>,

        /// A stored cart value (JSON id list) to read instead
        #[arg(long, conflicts_with = "ids")]
        raw: Option<String>,
    },
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Print the processor form parameters for a checkout body
    Preview {
        /// JSON file with `{items, success_url?, cancel_url?}`, or `-` for stdin
        file: PathBuf,

        /// Site base URL used for default redirect URLs
        #[arg(long, env = "APP_BASE_URL", default_value = "http://localhost:3000")]
        base_url: String,

        /// Checkout currency
        #[arg(long, env = "CHECKOUT_CURRENCY", default_value = "usd")]
        currency: CurrencyCode,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{output}");
            }
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let output = match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                search,
                category,
                sort,
                json,
            } => commands::catalog::list(
                search.as_deref(),
                category.as_deref(),
                sort.as_deref(),
                json,
            )?,
            CatalogAction::Show { id, json } => commands::catalog::show(id, json)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Summary { ids, raw } => match raw {
                Some(raw) => commands::cart::summary_from_raw(&raw),
                None => commands::cart::summary_from_adds(&ids),
            },
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Preview {
                file,
                base_url,
                currency,
            } => {
                let payload = commands::checkout::read_payload(&file)?;
                commands::checkout::preview(&payload, &base_url, currency)?
            }
        },
    };
    Ok(output)
}
