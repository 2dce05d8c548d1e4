//! Offline cart summaries.
//!
//! Replays a list of add operations through the same cart store the
//! storefront uses, then prints what the cart page would show. Handy for
//! checking totals against a support ticket.
//!
//! # Usage
//!
//! ```bash
//! atelier cart summary 4 7 4 12
//! atelier cart summary --raw '[4,4,999]'
//! ```

use std::fmt::Write as _;

use atelier_core::cart::CART_STORAGE_KEY;
use atelier_core::{Catalog, CartStore, CartSummary, MemoryStorage, ProductId};

/// Summarise a cart built by adding `ids` in order.
///
/// Duplicates are ignored, as the storefront's add button ignores them.
#[must_use]
pub fn summary_from_adds(ids: &[ProductId]) -> String {
    let mut store = CartStore::new(MemoryStorage::new());
    for id in ids {
        if !store.add(*id) {
            tracing::debug!(product_id = %id, "Already in cart");
        }
    }
    render(&store.get())
}

/// Summarise a raw stored cart value, exactly as a session would hold it.
///
/// Malformed values read as an empty cart.
#[must_use]
pub fn summary_from_raw(raw: &str) -> String {
    let store = CartStore::new(MemoryStorage::with_raw(CART_STORAGE_KEY, raw));
    render(&store.get())
}

fn render(items: &[ProductId]) -> String {
    let catalog = Catalog::builtin();
    let summary = CartSummary::build(items, &catalog);

    if summary.is_empty() {
        return "Cart is empty".to_owned();
    }

    let mut out = String::new();
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "{:>3}  {:<40} {:>10} x{:<3} {:>10}",
            line.product.id,
            line.product.title,
            line.product.price.display(),
            line.quantity,
            line.line_total().display()
        );
    }
    let _ = write!(
        out,
        "{} items, total {}",
        summary.item_count(),
        summary.total().display()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_adds_are_ignored() {
        let out = summary_from_adds(&[ProductId::new(1), ProductId::new(1)]);
        assert!(out.contains("1 items"));
    }

    #[test]
    fn test_raw_duplicates_count_as_quantity() {
        let out = summary_from_raw("[2,2,999]");
        assert!(out.contains("x2"));
        assert!(out.contains("2 items"));
    }

    #[test]
    fn test_malformed_raw_is_empty() {
        assert_eq!(summary_from_raw("{oops"), "Cart is empty");
    }
}
