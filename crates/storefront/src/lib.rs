//! Atelier storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused. [`app`] assembles the full router;
//! the binary only adds configuration, telemetry and the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, http::StatusCode, middleware::from_fn, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Directory served under `/static`, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Build the storefront router with its full middleware stack.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Sessions and the catalog are in memory and the payment processor is only
/// contacted on checkout, so a running server is a ready one.
async fn readiness() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use atelier_core::CurrencyCode;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{StorefrontConfig, StripeConfig};
    use crate::middleware::request_id::REQUEST_ID_HEADER;

    fn test_app() -> Router {
        let config = StorefrontConfig {
            host: [127, 0, 0, 1].into(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            stripe: StripeConfig {
                secret_key: SecretString::from("sk_test_4eC39HqLyjWDarjtT1zdp7dc".to_string()),
                // Nothing listens here; these tests never reach checkout.
                api_base: "http://127.0.0.1:9".to_string(),
                currency: CurrencyCode::USD,
            },
            sentry_dsn: None,
            sentry_environment: None,
        };
        app(AppState::new(config).unwrap())
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_checkout_without_items_is_rejected() {
        let response = test_app()
            .oneshot(
                Request::post("/api/checkout")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"items":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, r#"{"error":"No items provided"}"#);
    }

    #[tokio::test]
    async fn test_home_renders() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Featured Products"));
        assert!(html.contains("Core Values"));
        // Pages load no scripts, so the badge is plain markup.
        assert!(html.contains(r#"<span id="cart-count">"#));
        assert!(!html.contains("hx-get"));
    }

    #[tokio::test]
    async fn test_unknown_product_page() {
        let response = test_app()
            .oneshot(Request::get("/products/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Product not found"));
    }
}
