//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # Everything, in catalog order
//! atelier catalog list
//!
//! # Filtered and sorted, as the storefront listing would show it
//! atelier catalog list --search denim --category mens --sort price-low
//!
//! # One product as JSON
//! atelier catalog show 4 --json
//! ```

use std::fmt::Write as _;

use atelier_core::{Catalog, CatalogQuery, Product, ProductId};
use thiserror::Error;

/// Errors that can occur while browsing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product has this id.
    #[error("No product with id {0}")]
    NotFound(ProductId),

    /// JSON output failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the products matching a query.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn list(
    search: Option<&str>,
    category: Option<&str>,
    sort: Option<&str>,
    json: bool,
) -> Result<String, CatalogError> {
    let query = CatalogQuery::from_params(search, category, sort);
    let products = Catalog::builtin().query(&query);
    tracing::debug!(?query, results = products.len(), "Catalog queried");

    if json {
        return Ok(serde_json::to_string_pretty(&products)?);
    }

    let mut out = String::new();
    for product in &products {
        let _ = writeln!(out, "{}", summary_line(product));
    }
    let _ = write!(out, "{} products", products.len());
    Ok(out)
}

/// Render a single product.
///
/// # Errors
///
/// Returns an error if the product does not exist or JSON encoding fails.
pub fn show(id: ProductId, json: bool) -> Result<String, CatalogError> {
    let product = Catalog::builtin()
        .find(id)
        .ok_or(CatalogError::NotFound(id))?;

    if json {
        return Ok(serde_json::to_string_pretty(product)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(out, "  id:       {}", product.id);
    let _ = writeln!(out, "  category: {}", product.category.label());
    let _ = writeln!(out, "  price:    {}", product.price.display());
    let _ = writeln!(out, "  rating:   {}/5", product.rating);
    let _ = writeln!(
        out,
        "  stock:    {}",
        if product.in_stock { "in stock" } else { "out of stock" }
    );
    let _ = writeln!(out, "  image:    {}", product.image);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", product.description);
    for feature in product.features {
        let _ = writeln!(out, "  - {feature}");
    }
    Ok(out.trim_end().to_owned())
}

fn summary_line(product: &Product) -> String {
    format!(
        "{:>3}  {:<40} {:<8} {:>10}  {}/5{}",
        product.id,
        product.title,
        product.category.slug(),
        product.price.display(),
        product.rating,
        if product.in_stock { "" } else { "  (out of stock)" }
    )
}
