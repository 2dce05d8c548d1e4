//! Integration tests for checkout session creation.
//!
//! These tests run the storefront against a fake payment processor and check
//! both the JSON endpoint and the server-side cart checkout.

#![allow(clippy::unwrap_used)]

use atelier_integration_tests::{FAKE_CHECKOUT_URL, ProcessorMode, TestContext};
use axum::http::StatusCode;
use serde_json::json;

// =============================================================================
// POST /api/checkout
// =============================================================================

#[tokio::test]
async fn test_empty_items_rejected_without_processor_call() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx.post_json("/api/checkout", &json!({ "items": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No items provided");
    assert_eq!(ctx.processor.calls(), 0);
}

#[tokio::test]
async fn test_missing_or_non_list_items_rejected() {
    let ctx = TestContext::new().await;

    for payload in [json!({}), json!({ "items": "shirt" }), json!({ "items": null })] {
        let (status, body) = ctx.post_json("/api/checkout", &payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body["error"], "No items provided");
    }
    assert_eq!(ctx.processor.calls(), 0);
}

#[tokio::test]
async fn test_valid_items_return_redirect_url() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json(
            "/api/checkout",
            &json!({
                "items": [
                    { "id": 1, "title": "Silk Scarf", "price": "$10.00", "quantity": 2 },
                    { "price": "$5.50", "quantity": 1 }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], FAKE_CHECKOUT_URL);
    assert_eq!(ctx.processor.calls(), 1);

    let p = &ctx.processor;
    assert_eq!(p.last_param("mode").as_deref(), Some("payment"));
    assert_eq!(p.last_param("payment_method_types[0]").as_deref(), Some("card"));
    assert_eq!(
        p.last_param("line_items[0][price_data][unit_amount]").as_deref(),
        Some("1000")
    );
    assert_eq!(p.last_param("line_items[0][quantity]").as_deref(), Some("2"));
    assert_eq!(
        p.last_param("line_items[0][price_data][product_data][name]").as_deref(),
        Some("Silk Scarf")
    );
    assert_eq!(
        p.last_param("line_items[1][price_data][unit_amount]").as_deref(),
        Some("550")
    );
    assert_eq!(p.last_param("line_items[1][quantity]").as_deref(), Some("1"));
    assert_eq!(
        p.last_param("line_items[1][price_data][product_data][name]").as_deref(),
        Some("Product")
    );
    assert_eq!(
        p.last_param("line_items[0][price_data][currency]").as_deref(),
        Some("usd")
    );
}

#[tokio::test]
async fn test_default_and_explicit_redirect_urls() {
    let ctx = TestContext::new().await;
    let items = json!([{ "title": "Tote", "price": "$45.00" }]);

    ctx.post_json("/api/checkout", &json!({ "items": items })).await;
    assert_eq!(
        ctx.processor.last_param("success_url"),
        Some(ctx.url("/checkout/success"))
    );
    assert_eq!(
        ctx.processor.last_param("cancel_url"),
        Some(ctx.url("/checkout/cancel"))
    );

    ctx.post_json(
        "/api/checkout",
        &json!({
            "items": items,
            "success_url": "https://shop.example.com/thanks",
            "cancel_url": "https://shop.example.com/oops"
        }),
    )
    .await;
    assert_eq!(
        ctx.processor.last_param("success_url").as_deref(),
        Some("https://shop.example.com/thanks")
    );
    assert_eq!(
        ctx.processor.last_param("cancel_url").as_deref(),
        Some("https://shop.example.com/oops")
    );
}

#[tokio::test]
async fn test_unparsable_price_rejected() {
    let ctx = TestContext::new().await;

    let (status, body) = ctx
        .post_json(
            "/api/checkout",
            &json!({ "items": [{ "title": "Mystery", "price": "free" }] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(ctx.processor.calls(), 0);
}

#[tokio::test]
async fn test_processor_error_message_surfaces() {
    let ctx = TestContext::with_processor(ProcessorMode::Fail {
        status: 400,
        message: "Invalid API Key provided".to_string(),
    })
    .await;

    let (status, body) = ctx
        .post_json(
            "/api/checkout",
            &json!({ "items": [{ "title": "Tote", "price": "$45.00" }] }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Invalid API Key provided");
    assert_eq!(ctx.processor.calls(), 1);
}

#[tokio::test]
async fn test_unreachable_processor_is_server_error() {
    let ctx = TestContext::with_processor(ProcessorMode::Unreachable).await;

    let (status, body) = ctx
        .post_json(
            "/api/checkout",
            &json!({ "items": [{ "title": "Tote", "price": "$45.00" }] }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("HTTP error:"), "{message}");
    assert_eq!(ctx.processor.calls(), 0);
}

// =============================================================================
// POST /cart/checkout
// =============================================================================

#[tokio::test]
async fn test_cart_checkout_redirects_to_processor() {
    let ctx = TestContext::new().await;
    ctx.post_json("/api/cart/add", &json!({ "id": 1 })).await;
    ctx.post_json("/api/cart/add", &json!({ "id": 2 })).await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/checkout"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(
        resp.headers()["location"].to_str().unwrap(),
        FAKE_CHECKOUT_URL
    );
    assert_eq!(
        ctx.processor.last_param("line_items[1][quantity]").as_deref(),
        Some("1")
    );
    assert!(ctx.processor.last_param("line_items[2][quantity]").is_none());
}

#[tokio::test]
async fn test_cart_checkout_with_empty_cart_returns_to_cart() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/checkout"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers()["location"].to_str().unwrap(), "/cart");
    assert_eq!(ctx.processor.calls(), 0);
}

#[tokio::test]
async fn test_cart_checkout_failure_shows_notice_and_keeps_cart() {
    let ctx = TestContext::with_processor(ProcessorMode::Fail {
        status: 500,
        message: "Processor down".to_string(),
    })
    .await;
    ctx.post_json("/api/cart/add", &json!({ "id": 3 })).await;

    let resp = ctx
        .client
        .post(ctx.url("/cart/checkout"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 502);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Failed to initiate checkout. Please try again."));
    assert_eq!(ctx.cart_items().await, vec![3]);
}
