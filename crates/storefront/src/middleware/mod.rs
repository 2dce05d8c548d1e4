//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request spans)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, framing, sniffing)
//! 5. Session layer (tower-sessions, holds the cart)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
