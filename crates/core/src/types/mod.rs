//! Core types for Atelier.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::ProductId;
pub use price::{CurrencyCode, Price, PriceError, parse_cents};
