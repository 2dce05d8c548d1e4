//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use atelier_core::{Category, CatalogQuery, Product, ProductId, SortKey};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::services::SessionCart;
use crate::state::AppState;

/// Number of related products on the detail page.
const RELATED_COUNT: usize = 3;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    #[must_use]
    pub fn to_catalog_query(&self) -> CatalogQuery {
        CatalogQuery::from_params(
            self.search.as_deref(),
            self.category.as_deref(),
            self.sort.as_deref(),
        )
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<&'static Product>,
    pub categories: Vec<Category>,
    pub sort_options: &'static [SortKey],
    pub search: String,
    pub selected_category: String,
    pub selected_sort: String,
    pub cart_count: u32,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: &'static Product,
    pub related_products: Vec<&'static Product>,
    pub in_cart: bool,
    pub cart_count: u32,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
    pub cart_count: u32,
}

/// Display product listing page.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;
    let catalog = state.catalog();
    let catalog_query = query.to_catalog_query();
    let products = catalog.query(&catalog_query);

    tracing::debug!(results = products.len(), "Catalog queried");

    ProductsIndexTemplate {
        products,
        categories: catalog.categories(),
        sort_options: &SortKey::ALL,
        search: catalog_query.search.clone(),
        selected_category: catalog_query.category.as_param().to_owned(),
        selected_sort: catalog_query.sort.as_param().to_owned(),
        cart_count: cart.summary(&catalog).item_count(),
    }
}

/// Display product detail page.
///
/// Ids that are not numeric or not in the catalog render the not-found page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let cart = SessionCart::load(session).await;
    let catalog = state.catalog();
    let cart_count = cart.summary(&catalog).item_count();

    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| catalog.find(id));

    let Some(product) = product else {
        return (
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                message: "Product not found".to_string(),
                cart_count,
            },
        )
            .into_response();
    };

    ProductShowTemplate {
        product,
        related_products: catalog.related(product, RELATED_COUNT),
        in_cart: cart.items().contains(&product.id),
        cart_count,
    }
    .into_response()
}
