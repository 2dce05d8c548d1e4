//! Atelier Core - catalog, cart and checkout logic.
//!
//! This crate holds everything about the shop that is not HTTP:
//! - [`catalog`] - the static product list and the listing filter/sort
//! - [`cart`] - the persisted cart store, its observers, and cart summaries
//! - [`checkout`] - shaping an order summary into a payment-session request
//! - [`types`] - product IDs and integer-cents prices
//!
//! # Architecture
//!
//! The core crate does no network I/O. Persistence is reached through the
//! [`cart::CartStorage`] trait, so the same cart logic runs against a web
//! session in the storefront and against memory in tests and the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod types;

pub use cart::{CartStorage, CartStore, CartSummary, MemoryStorage};
pub use catalog::{Catalog, CatalogQuery, Category, CategoryFilter, Product, SortKey};
pub use checkout::{CheckoutDefaults, CheckoutError, CheckoutRequest, LineItems, SessionRequest};
pub use types::*;
