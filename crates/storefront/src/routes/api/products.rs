//! Catalog API.

use atelier_core::{Product, ProductId};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::products::ListingQuery;
use crate::state::AppState;

/// List products matching the query.
///
/// GET /api/products?search=&category=&sort=
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<&'static Product>> {
    Json(state.catalog().query(&query.to_catalog_query()))
}

/// Get a single product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static Product>> {
    id.parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().find(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))
}
