//! Integration tests for Atelier.
//!
//! Each test boots the full storefront router on an ephemeral port next to a
//! fake payment processor, then drives it over HTTP with a cookie-keeping
//! client, the way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_checkout` - Checkout endpoint and cart checkout
//! - `storefront_cart` - Session cart pages and API
//! - `storefront_catalog` - Listing, detail and catalog API

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use atelier_core::CurrencyCode;
use atelier_storefront::config::{StorefrontConfig, StripeConfig};
use atelier_storefront::state::AppState;
use axum::{Form, Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use reqwest::Client;
use secrecy::SecretString;
use tokio::net::TcpListener;

/// URL the fake processor hands out for every session.
pub const FAKE_CHECKOUT_URL: &str = "https://checkout.stripe.com/c/pay/cs_test_fake";

/// How the fake processor answers.
#[derive(Debug, Clone)]
pub enum ProcessorMode {
    /// 200 with `{id, url}`.
    Succeed,
    /// The given status with `{error: {message}}`.
    Fail { status: u16, message: String },
    /// Nothing listens at the processor address.
    Unreachable,
}

/// What the fake processor has seen.
#[derive(Debug)]
pub struct FakeProcessor {
    mode: ProcessorMode,
    calls: AtomicUsize,
    last_form: Mutex<Vec<(String, String)>>,
}

impl FakeProcessor {
    /// Number of session-creation calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Form body of the most recent call.
    pub fn last_form(&self) -> Vec<(String, String)> {
        self.last_form.lock().unwrap().clone()
    }

    /// Value of one parameter in the most recent call.
    pub fn last_param(&self, key: &str) -> Option<String> {
        self.last_form()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

async fn create_session(
    State(processor): State<Arc<FakeProcessor>>,
    Form(form): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    processor.calls.fetch_add(1, Ordering::SeqCst);
    *processor.last_form.lock().unwrap() = form;

    match &processor.mode {
        ProcessorMode::Succeed => (
            StatusCode::OK,
            Json(serde_json::json!({ "id": "cs_test_fake", "url": FAKE_CHECKOUT_URL })),
        ),
        ProcessorMode::Fail { status, message } => (
            StatusCode::from_u16(*status).unwrap(),
            Json(serde_json::json!({
                "error": { "message": message, "type": "invalid_request_error" }
            })),
        ),
        // Never served; the storefront is pointed at a closed port instead.
        ProcessorMode::Unreachable => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({})),
        ),
    }
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address that refuses connections: bound once, then released.
async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A running storefront wired to a fake payment processor.
pub struct TestContext {
    /// Client that keeps the session cookie and does not follow redirects.
    pub client: Client,
    pub base_url: String,
    pub processor: Arc<FakeProcessor>,
}

impl TestContext {
    /// Storefront whose processor accepts every session.
    pub async fn new() -> Self {
        Self::with_processor(ProcessorMode::Succeed).await
    }

    /// Storefront whose processor answers as `mode` says.
    pub async fn with_processor(mode: ProcessorMode) -> Self {
        let offline = matches!(mode, ProcessorMode::Unreachable);
        let processor = Arc::new(FakeProcessor {
            mode,
            calls: AtomicUsize::new(0),
            last_form: Mutex::new(Vec::new()),
        });
        let processor_addr = if offline {
            closed_port().await
        } else {
            let processor_router = Router::new()
                .route("/v1/checkout/sessions", post(create_session))
                .with_state(Arc::clone(&processor));
            serve(processor_router).await
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let config = StorefrontConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: base_url.clone(),
            stripe: StripeConfig {
                secret_key: SecretString::from("sk_test_4eC39HqLyjWDarjtT1zdp7dc".to_string()),
                api_base: format!("http://{processor_addr}"),
                currency: CurrencyCode::USD,
            },
            sentry_dsn: None,
            sentry_environment: None,
        };
        let state = AppState::new(config).unwrap();
        let app = atelier_storefront::app(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            client,
            base_url,
            processor,
        }
    }

    /// Absolute URL for a storefront path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a JSON document.
    pub async fn get_json(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
        (status, resp.json().await.unwrap())
    }

    /// POST a JSON body and read a JSON answer.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap();
        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
        (status, resp.json().await.unwrap())
    }

    /// Ids currently stored in this client's cart.
    pub async fn cart_items(&self) -> Vec<i64> {
        let (_, cart) = self.get_json("/api/cart").await;
        cart["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect()
    }
}
