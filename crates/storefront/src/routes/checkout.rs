//! Checkout callback pages.
//!
//! The payment processor sends the shopper back here after the hosted
//! checkout. Neither page talks to the processor; the session outcome is
//! taken on trust from the route.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::services::SessionCart;
use crate::state::AppState;

/// Payment success page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct CheckoutSuccessTemplate {
    pub cart_count: u32,
}

/// Payment cancelled page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/cancel.html")]
pub struct CheckoutCancelTemplate {
    pub cart_count: u32,
}

/// Payment completed: empty the cart.
#[instrument(skip(session))]
pub async fn success(session: Session) -> impl IntoResponse {
    let mut cart = SessionCart::load(session).await;
    cart.clear();
    cart.save().await;

    add_breadcrumb("checkout", "Checkout completed", &[]);
    tracing::info!("Checkout completed, cart cleared");

    CheckoutSuccessTemplate { cart_count: 0 }
}

/// Payment abandoned: the cart is kept for another attempt.
#[instrument(skip(state, session))]
pub async fn cancel(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;
    let cart_count = cart.summary(&state.catalog()).item_count();

    add_breadcrumb("checkout", "Checkout cancelled", &[]);

    CheckoutCancelTemplate { cart_count }
}
