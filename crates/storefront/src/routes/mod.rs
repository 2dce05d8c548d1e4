//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check
//!
//! # Products
//! GET  /products               - Listing (?search=&category=&sort=)
//! GET  /products/{id}          - Product detail
//!
//! # Cart (form posts; HTMX requests get fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add product (form: id)
//! POST /cart/remove            - Remove product (form: id)
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/checkout          - Create a payment session, redirect to it
//!
//! # Checkout callbacks
//! GET  /checkout/success       - Payment completed (clears the cart)
//! GET  /checkout/cancel        - Payment abandoned (cart untouched)
//!
//! # Contact
//! GET  /contact                - Contact page
//! POST /contact                - Contact form submission
//!
//! # JSON API
//! GET  /api/products           - Filtered product list
//! GET  /api/products/{id}      - Single product
//! GET  /api/cart               - Cart summary
//! POST /api/cart/add           - Add product ({id})
//! POST /api/cart/remove        - Remove product ({id})
//! POST /api/cart/clear         - Empty the cart
//! POST /api/checkout           - Create a payment session ({items, success_url?, cancel_url?})
//! ```

pub mod api;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod products;

use axum::{
    Router,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::state::AppState;

/// Event name announced to HTMX and API clients whenever the cart changes.
///
/// The bundled pages do not listen for it; they re-render after each post.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Header HTMX sets on its requests.
const HX_REQUEST_HEADER: &str = "hx-request";

/// Header HTMX reads to fire client-side events.
const HX_TRIGGER_HEADER: &str = "hx-trigger";

/// Whether the request was made by HTMX rather than a plain form post.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .is_some_and(|v| v.as_bytes() == b"true")
}

/// Attach the cart-updated trigger when the cart changed.
///
/// Every surface showing cart state listens for this event and re-fetches the
/// whole cart.
pub fn announce_cart_change(changed: bool, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if changed {
        response.headers_mut().insert(
            HX_TRIGGER_HEADER,
            HeaderValue::from_static(CART_UPDATED_EVENT),
        );
    }
    response
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create the checkout callback routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/success", get(checkout::success))
        .route("/cancel", get(checkout::cancel))
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products::index))
        .route("/products/{id}", get(api::products::show))
        .route("/cart", get(api::cart::show))
        .route("/cart/add", post(api::cart::add))
        .route("/cart/remove", post(api::cart::remove))
        .route("/cart/clear", post(api::cart::clear))
        .route("/checkout", post(api::checkout::create))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/contact", get(contact::show).post(contact::submit))
        .nest("/api", api_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert(HX_REQUEST_HEADER, HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }

    #[test]
    fn test_announce_cart_change() {
        let response = announce_cart_change(true, "ok");
        assert_eq!(
            response.headers().get(HX_TRIGGER_HEADER).unwrap(),
            CART_UPDATED_EVENT
        );

        let response = announce_cart_change(false, "ok");
        assert!(response.headers().get(HX_TRIGGER_HEADER).is_none());
    }
}
