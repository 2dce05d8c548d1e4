//! Cart API.
//!
//! Every mutation answers with the updated cart and, when the cart changed,
//! an `HX-Trigger: cart-updated` header.

use atelier_core::{CartSummary, Price, Product, ProductId};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::routes::announce_cart_change;
use crate::services::SessionCart;
use crate::state::AppState;

/// Body of the add and remove endpoints.
#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    pub id: ProductId,
}

/// One line of the cart response.
#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    pub product: &'static Product,
    pub quantity: u32,
    pub line_total: Price,
}

/// Cart state as returned by every cart endpoint.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    /// The stored id list, unknown ids included.
    pub items: Vec<ProductId>,
    pub lines: Vec<CartLineResponse>,
    pub item_count: u32,
    pub total: Price,
}

impl CartResponse {
    fn new(items: Vec<ProductId>, summary: &CartSummary<'static>) -> Self {
        Self {
            items,
            lines: summary
                .lines
                .iter()
                .map(|line| CartLineResponse {
                    product: line.product,
                    quantity: line.quantity,
                    line_total: line.line_total(),
                })
                .collect(),
            item_count: summary.item_count(),
            total: summary.total(),
        }
    }

    fn from_cart(state: &AppState, cart: &SessionCart) -> Self {
        Self::new(cart.items(), &cart.summary(&state.catalog()))
    }
}

fn parse_body(body: std::result::Result<Json<CartItemRequest>, JsonRejection>) -> Result<ProductId> {
    body.map(|Json(request)| request.id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Write the cart back and answer with its new state.
async fn respond(state: &AppState, cart: SessionCart) -> Response {
    let changed = cart.is_changed();
    let body = CartResponse::from_cart(state, &cart);
    cart.save().await;
    announce_cart_change(changed, Json(body))
}

/// Get the cart.
///
/// GET /api/cart
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Json<CartResponse> {
    let cart = SessionCart::load(session).await;
    Json(CartResponse::from_cart(&state, &cart))
}

/// Add a product to the cart.
///
/// POST /api/cart/add
#[instrument(skip(state, session, body))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    body: std::result::Result<Json<CartItemRequest>, JsonRejection>,
) -> Result<Response> {
    let id = parse_body(body)?;
    if !state.catalog().contains(id) {
        return Err(AppError::NotFound(format!("Product {id}")));
    }

    let mut cart = SessionCart::load(session).await;
    if cart.add(id) {
        add_breadcrumb("cart", "Added to cart", &[("product_id", id.to_string())]);
    }
    Ok(respond(&state, cart).await)
}

/// Remove a product from the cart.
///
/// POST /api/cart/remove
#[instrument(skip(state, session, body))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    body: std::result::Result<Json<CartItemRequest>, JsonRejection>,
) -> Result<Response> {
    let id = parse_body(body)?;

    let mut cart = SessionCart::load(session).await;
    cart.remove(id);
    add_breadcrumb("cart", "Removed from cart", &[("product_id", id.to_string())]);
    Ok(respond(&state, cart).await)
}

/// Empty the cart.
///
/// POST /api/cart/clear
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Response {
    let mut cart = SessionCart::load(session).await;
    cart.clear();
    add_breadcrumb("cart", "Cleared cart", &[]);
    respond(&state, cart).await
}

#[cfg(test)]
mod tests {
    use atelier_core::Catalog;

    use super::*;

    #[test]
    fn test_cart_response_keeps_unknown_ids_out_of_lines() {
        let catalog = Catalog::builtin();
        let items = vec![ProductId::new(1), ProductId::new(999), ProductId::new(2)];
        let summary = CartSummary::build(&items, &catalog);
        let response = CartResponse::new(items.clone(), &summary);

        assert_eq!(response.items, items);
        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.item_count, 2);

        let expected = catalog.find(ProductId::new(1)).map(|p| p.price.cents()).unwrap_or(0)
            + catalog.find(ProductId::new(2)).map(|p| p.price.cents()).unwrap_or(0);
        assert_eq!(response.total.cents(), expected);
    }
}
