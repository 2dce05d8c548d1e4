//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Session-backed cart persistence over the core cart store
//! - `payments` - Hosted-checkout session creation with the payment processor

pub mod cart;
pub mod payments;

pub use cart::SessionCart;
pub use payments::{CheckoutSession, PaymentError, StripeClient};
