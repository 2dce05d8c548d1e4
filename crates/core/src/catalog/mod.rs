//! Product catalog and the listing filter.
//!
//! The catalog is static and read-only. [`Catalog::query`] produces the
//! derived listing view: search, category filter and sort, with no side
//! effects.

mod data;

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::types::{Price, ProductId};

pub use data::PRODUCTS;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ladies,
    Mens,
    Shoes,
    Bags,
    Gifts,
    Home,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Ladies,
        Self::Mens,
        Self::Shoes,
        Self::Bags,
        Self::Gifts,
        Self::Home,
    ];

    /// URL/query value, e.g. `"mens"`.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Ladies => "ladies",
            Self::Mens => "mens",
            Self::Shoes => "shoes",
            Self::Bags => "bags",
            Self::Gifts => "gifts",
            Self::Home => "home",
        }
    }

    /// Human label, e.g. `"Men's Garments"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ladies => "Ladies Garments",
            Self::Mens => "Men's Garments",
            Self::Shoes => "Shoes",
            Self::Bags => "Bags & Wallets",
            Self::Gifts => "Gifts",
            Self::Home => "Home Textiles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Returned when a category slug is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// A product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: &'static str,
    pub description: &'static str,
    pub price: Price,
    /// Absolute URL or site-relative path.
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub category: Category,
    /// Whole stars, 0 to 5.
    pub rating: u8,
    pub in_stock: bool,
}

impl Product {
    /// Case-insensitive substring match on title or description.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// Which categories a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A value that names no category; nothing matches it.
    Unknown(String),
}

impl CategoryFilter {
    /// Interpret a query-string value. Missing, empty and `"all"` mean all.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(v) if v.eq_ignore_ascii_case("all") => Self::All,
            Some(v) => v
                .parse()
                .map_or_else(|_| Self::Unknown(v.to_owned()), Self::Only),
        }
    }

    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
            Self::Unknown(_) => false,
        }
    }

    /// Value to echo back into a listing form.
    #[must_use]
    pub fn as_param(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(c) => c.slug(),
            Self::Unknown(v) => v,
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Rating];

    /// Interpret a query-string value; anything unrecognised is `Featured`.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("rating") => Self::Rating,
            _ => Self::Featured,
        }
    }

    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Top Rated",
        }
    }
}

/// Listing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Build a query from raw request parameters.
    #[must_use]
    pub fn from_params(search: Option<&str>, category: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            search: search.unwrap_or_default().to_owned(),
            category: CategoryFilter::from_param(category),
            sort: SortKey::from_param(sort),
        }
    }
}

/// A read-only view over a product list.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    products: &'a [Product],
}

impl Catalog<'static> {
    /// The shop's built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self { products: PRODUCTS }
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Catalog<'a> {
    #[must_use]
    pub const fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// Every product in catalog order.
    #[must_use]
    pub const fn all(&self) -> &'a [Product] {
        self.products
    }

    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&'a Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Categories that have at least one product, in navigation order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.products.iter().any(|p| p.category == *c))
            .collect()
    }

    /// Other products in the same category, for "you may also like".
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&'a Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Products matching `query`, ordered by its sort key.
    ///
    /// Sorting is stable, so ties keep catalog order.
    #[must_use]
    pub fn query(&self, query: &CatalogQuery) -> Vec<&'a Product> {
        let mut matches: Vec<&'a Product> = self
            .products
            .iter()
            .filter(|p| p.matches_search(&query.search) && query.category.matches(p.category))
            .collect();

        match query.sort {
            SortKey::Featured => {}
            SortKey::PriceLow => matches.sort_by_key(|p| p.price.cents()),
            SortKey::PriceHigh => matches.sort_by(|a, b| b.price.cents().cmp(&a.price.cents())),
            SortKey::Rating => matches.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }

        matches
    }
}
