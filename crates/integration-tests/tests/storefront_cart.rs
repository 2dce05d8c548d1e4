//! Integration tests for the session cart.
//!
//! The cart lives in the visitor's session, so every test drives one client
//! (one cookie jar) through a sequence of requests.

#![allow(clippy::unwrap_used)]

use atelier_integration_tests::TestContext;
use axum::http::StatusCode;
use serde_json::json;

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_new_visitor_has_empty_cart() {
    let ctx = TestContext::new().await;

    let (status, cart) = ctx.get_json("/api/cart").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"], json!([]));
    assert_eq!(cart["item_count"], 0);
    assert_eq!(cart["total"]["amount_cents"], 0);
}

#[tokio::test]
async fn test_add_remove_sequence() {
    let ctx = TestContext::new().await;

    for id in [4, 7, 4, 12] {
        ctx.post_json("/api/cart/add", &json!({ "id": id })).await;
    }
    assert_eq!(ctx.cart_items().await, vec![4, 7, 12]);

    ctx.post_json("/api/cart/remove", &json!({ "id": 7 })).await;
    assert_eq!(ctx.cart_items().await, vec![4, 12]);

    // Removing something absent leaves the list alone.
    ctx.post_json("/api/cart/remove", &json!({ "id": 30 })).await;
    assert_eq!(ctx.cart_items().await, vec![4, 12]);
}

#[tokio::test]
async fn test_cart_totals_follow_catalog_prices() {
    let ctx = TestContext::new().await;
    let (_, p1) = ctx.get_json("/api/products/1").await;
    let (_, p2) = ctx.get_json("/api/products/2").await;

    ctx.post_json("/api/cart/add", &json!({ "id": 1 })).await;
    let (_, cart) = ctx.post_json("/api/cart/add", &json!({ "id": 2 })).await;

    let expected = p1["price"]["amount_cents"].as_i64().unwrap()
        + p2["price"]["amount_cents"].as_i64().unwrap();
    assert_eq!(cart["total"]["amount_cents"].as_i64().unwrap(), expected);
    assert_eq!(cart["item_count"], 2);
    assert_eq!(cart["lines"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_mutations_announce_cart_update() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/cart/add"))
        .json(&json!({ "id": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["hx-trigger"], "cart-updated");

    // Adding a product already in the cart changes nothing.
    let resp = ctx
        .client
        .post(ctx.url("/api/cart/add"))
        .json(&json!({ "id": 5 }))
        .send()
        .await
        .unwrap();
    assert!(resp.headers().get("hx-trigger").is_none());
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/api/cart/add", &json!({ "id": 999 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product 999 not found");
    assert!(ctx.cart_items().await.is_empty());
}

#[tokio::test]
async fn test_add_with_malformed_body_is_bad_request() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json("/api/cart/add", &json!({ "id": "four" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_clear_empties_cart() {
    let ctx = TestContext::new().await;
    ctx.post_json("/api/cart/add", &json!({ "id": 1 })).await;
    ctx.post_json("/api/cart/add", &json!({ "id": 2 })).await;

    let (status, cart) = ctx.post_json("/api/cart/clear", &json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"], json!([]));
    assert!(ctx.cart_items().await.is_empty());
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let alice = TestContext::new().await;
    alice.post_json("/api/cart/add", &json!({ "id": 1 })).await;

    let other_client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();
    let cart: serde_json::Value = other_client
        .get(alice.url("/api/cart"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(cart["items"], json!([]));
    assert_eq!(alice.cart_items().await, vec![1]);
}

// =============================================================================
// Form posts and pages
// =============================================================================

#[tokio::test]
async fn test_form_add_redirects_to_cart() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/add"))
        .form(&[("id", "6")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers()["location"], "/cart");
    assert_eq!(ctx.cart_items().await, vec![6]);

    let html = ctx
        .client
        .get(ctx.url("/cart"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_htmx_add_returns_count_fragment() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/add"))
        .header("HX-Request", "true")
        .form(&[("id", "8")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.headers()["hx-trigger"], "cart-updated");
    let html = resp.text().await.unwrap();
    assert!(html.contains("id=\"cart-count\""));
    assert!(html.contains(">1<"));
}

#[tokio::test]
async fn test_form_remove_and_clear() {
    let ctx = TestContext::new().await;
    for id in ["1", "2", "3"] {
        ctx.client
            .post(ctx.url("/cart/add"))
            .form(&[("id", id)])
            .send()
            .await
            .unwrap();
    }

    ctx.client
        .post(ctx.url("/cart/remove"))
        .form(&[("id", "2")])
        .send()
        .await
        .unwrap();
    assert_eq!(ctx.cart_items().await, vec![1, 3]);

    ctx.client
        .post(ctx.url("/cart/clear"))
        .send()
        .await
        .unwrap();
    assert!(ctx.cart_items().await.is_empty());
}

#[tokio::test]
async fn test_empty_cart_page() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/cart")).send().await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.unwrap().contains("Your cart is empty"));
}

// =============================================================================
// Checkout callbacks
// =============================================================================

#[tokio::test]
async fn test_success_page_clears_cart() {
    let ctx = TestContext::new().await;
    ctx.post_json("/api/cart/add", &json!({ "id": 10 })).await;

    let resp = ctx
        .client
        .get(ctx.url("/checkout/success"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.unwrap().contains("Payment successful"));
    assert!(ctx.cart_items().await.is_empty());
}

#[tokio::test]
async fn test_cancel_page_keeps_cart() {
    let ctx = TestContext::new().await;
    ctx.post_json("/api/cart/add", &json!({ "id": 10 })).await;

    let resp = ctx
        .client
        .get(ctx.url("/checkout/cancel"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.unwrap().contains("Your cart is safe."));
    assert_eq!(ctx.cart_items().await, vec![10]);
}
