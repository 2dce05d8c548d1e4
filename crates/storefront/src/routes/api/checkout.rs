//! Checkout session API.

use atelier_core::{CheckoutRequest, SessionRequest};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::PaymentError;
use crate::state::AppState;

/// Successful response: where to send the shopper.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// Create a hosted checkout session.
///
/// POST /api/checkout
///
/// Body: `{items: [{id?, title?, price, quantity?}], success_url?, cancel_url?}`.
/// Nothing is persisted; the processor owns the session from here on.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    // Shaping errors are rejected before the processor is contacted.
    let session_request = SessionRequest::build(request, state.checkout_defaults())?;

    add_breadcrumb(
        "checkout",
        "Creating checkout session",
        &[
            ("lines", session_request.line_items.len().to_string()),
            ("amount_total", session_request.amount_total().to_string()),
        ],
    );

    let session = state
        .payments()
        .create_checkout_session(&session_request)
        .await?;
    let url = session
        .url
        .ok_or(AppError::Payment(PaymentError::MissingUrl(session.id)))?;

    Ok(Json(CheckoutResponse { url }))
}
