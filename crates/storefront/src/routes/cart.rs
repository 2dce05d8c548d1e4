//! Cart route handlers.
//!
//! Cart forms post plain `application/x-www-form-urlencoded` bodies and are
//! answered with a redirect back to the cart page. HTMX requests get the
//! cart-count fragment plus an `HX-Trigger: cart-updated` header instead, so
//! every listener re-fetches the cart.

use askama::Template;
use askama_web::WebTemplate;
use atelier_core::{CartSummary, CheckoutRequest, LineItems, ProductId, SessionRequest};
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::routes::{announce_cart_change, is_htmx};
use crate::services::SessionCart;
use crate::state::AppState;

/// Notice shown when the processor refuses to start a checkout.
pub const CHECKOUT_FAILED_NOTICE: &str = "Failed to initiate checkout. Please try again.";

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate<'a> {
    pub cart: CartSummary<'a>,
    pub notice: Option<String>,
    pub cart_count: u32,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Answer a cart mutation.
///
/// HTMX callers get the count fragment; plain form posts are redirected to
/// the cart page.
fn mutation_response(state: &AppState, cart: &SessionCart, headers: &HeaderMap) -> Response {
    if is_htmx(headers) {
        let count = cart.summary(&state.catalog()).item_count();
        announce_cart_change(cart.is_changed(), CartCountTemplate { count })
    } else {
        Redirect::to("/cart").into_response()
    }
}

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;
    let summary = cart.summary(&state.catalog());

    CartShowTemplate {
        cart_count: summary.item_count(),
        cart: summary,
        notice: None,
    }
}

/// Add a product to the cart.
///
/// Products already in the cart are left as they are.
#[instrument(skip(state, session, headers))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<CartItemForm>,
) -> Response {
    let mut cart = SessionCart::load(session).await;

    if state.catalog().contains(form.id) {
        if cart.add(form.id) {
            add_breadcrumb("cart", "Added to cart", &[("product_id", form.id.to_string())]);
        }
    } else {
        tracing::debug!(product_id = %form.id, "Ignoring add of unknown product");
    }

    let response = mutation_response(&state, &cart, &headers);
    cart.save().await;
    response
}

/// Remove a product from the cart.
#[instrument(skip(state, session, headers))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<CartItemForm>,
) -> Response {
    let mut cart = SessionCart::load(session).await;
    cart.remove(form.id);
    add_breadcrumb(
        "cart",
        "Removed from cart",
        &[("product_id", form.id.to_string())],
    );

    let response = mutation_response(&state, &cart, &headers);
    cart.save().await;
    response
}

/// Empty the cart.
#[instrument(skip(state, session, headers))]
pub async fn clear(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Response {
    let mut cart = SessionCart::load(session).await;
    cart.clear();
    add_breadcrumb("cart", "Cleared cart", &[]);

    let response = mutation_response(&state, &cart, &headers);
    cart.save().await;
    response
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;
    CartCountTemplate {
        count: cart.summary(&state.catalog()).item_count(),
    }
}

/// Start a hosted checkout for the cart and redirect to it.
///
/// An empty cart goes back to the cart page. A processor failure re-renders
/// the cart with a notice; the cart itself is left untouched either way.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Response {
    let cart = SessionCart::load(session).await;
    let summary = cart.summary(&state.catalog());

    if summary.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    let request = CheckoutRequest::from_items(&summary.line_items());
    let session_request = match SessionRequest::build(request, state.checkout_defaults()) {
        Ok(session_request) => session_request,
        Err(e) => {
            tracing::error!(error = %e, "Cart could not be shaped into a checkout");
            return checkout_failed(summary);
        }
    };

    add_breadcrumb(
        "checkout",
        "Starting checkout",
        &[("amount_total", session_request.amount_total().to_string())],
    );

    match state
        .payments()
        .create_checkout_session(&session_request)
        .await
    {
        Ok(session) => match session.url {
            Some(url) => Redirect::to(&url).into_response(),
            None => checkout_failed(summary),
        },
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(error = %e, sentry_event_id = %event_id, "Failed to create checkout session");
            checkout_failed(summary)
        }
    }
}

fn checkout_failed(summary: CartSummary<'_>) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        CartShowTemplate {
            cart_count: summary.item_count(),
            cart: summary,
            notice: Some(CHECKOUT_FAILED_NOTICE.to_string()),
        },
    )
        .into_response()
}
