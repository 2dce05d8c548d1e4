//! JSON API route handlers.
//!
//! Errors are returned as `{"error": "..."}` via [`crate::error::AppError`].

pub mod cart;
pub mod checkout;
pub mod products;
