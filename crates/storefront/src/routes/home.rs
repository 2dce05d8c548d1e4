//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use atelier_core::Product;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::services::SessionCart;
use crate::state::AppState;

/// Number of products shown in the featured strip.
const FEATURED_COUNT: usize = 6;

/// A core value card in the mission section.
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
}

/// Mission section content.
pub const VALUES: &[ValueCard] = &[
    ValueCard {
        title: "Innovation",
        description: "Pioneering cutting-edge solutions that redefine industry standards and push technological boundaries.",
        stat: "150+ Projects",
    },
    ValueCard {
        title: "Integrity",
        description: "Upholding the highest ethical standards in every decision, fostering trust and transparency.",
        stat: "100% Trust",
    },
    ValueCard {
        title: "Global Impact",
        description: "Creating scalable solutions that bridge continents and empower diverse communities worldwide.",
        stat: "50+ Countries",
    },
    ValueCard {
        title: "Excellence",
        description: "Delivering unparalleled quality through meticulous craftsmanship and relentless pursuit of perfection.",
        stat: "Award Winning",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<&'static Product>,
    pub values: &'static [ValueCard],
    pub cart_count: u32,
}

/// Display the home page.
///
/// Featured products are the highest-rated in-stock items.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;
    let catalog = state.catalog();

    let mut featured: Vec<&'static Product> =
        catalog.all().iter().filter(|p| p.in_stock).collect();
    featured.sort_by(|a, b| b.rating.cmp(&a.rating));
    featured.truncate(FEATURED_COUNT);

    HomeTemplate {
        featured,
        values: VALUES,
        cart_count: cart.summary(&catalog).item_count(),
    }
}
