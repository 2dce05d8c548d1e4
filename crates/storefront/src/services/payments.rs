//! Hosted-checkout client for the payment processor (Stripe Checkout).
//!
//! The storefront only ever creates sessions: it posts the shaped line items
//! and hands the returned URL to the browser. Session state lives entirely
//! with the processor.

use atelier_core::SessionRequest;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::StripeConfig;

/// Checkout sessions endpoint, relative to the API base.
const SESSIONS_PATH: &str = "/v1/checkout/sessions";

/// Errors that can occur when talking to the payment processor.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Session was created but carries no redirect URL.
    #[error("Payment session {0} has no redirect URL")]
    MissingUrl(String),

    /// Client could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A created checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error envelope returned by the processor.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Payment processor API client.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    sessions_url: String,
}

impl StripeClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &StripeConfig) -> Result<Self, PaymentError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key.expose_secret());
        let mut auth_value = HeaderValue::from_str(&auth_value)
            .map_err(|e| PaymentError::Config(format!("Invalid API key format: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            sessions_url: format!("{}{SESSIONS_PATH}", config.api_base),
        })
    }

    /// Create a hosted checkout session and return it.
    ///
    /// No retries: a failure is reported to the shopper, who retries by hand.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the processor rejects it, or the
    /// session comes back without a redirect URL.
    #[instrument(skip(self, request), fields(lines = request.line_items.len(), amount_total = request.amount_total()))]
    pub async fn create_checkout_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let response = self
            .client
            .post(&self.sessions_url)
            .form(&request.to_form_params())
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message: api_error_message(&body, status.as_u16()),
            });
        }

        let session: CheckoutSession = response.json().await?;
        if session.url.as_deref().is_none_or(str::is_empty) {
            return Err(PaymentError::MissingUrl(session.id));
        }

        tracing::info!(session_id = %session.id, "Checkout session created");
        Ok(session)
    }
}

/// Pull the human-readable message out of an error body.
fn api_error_message(body: &str, status: u16) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            error:
                ApiErrorDetail {
                    message: Some(message),
                    ..
                },
        }) => message,
        Ok(ApiErrorBody {
            error: ApiErrorDetail {
                kind: Some(kind), ..
            },
        }) => format!("Payment processor error ({kind})"),
        _ if body.trim().is_empty() => format!("Payment processor returned status {status}"),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_prefers_message() {
        let body = r#"{"error":{"message":"Invalid API Key provided","type":"invalid_request_error"}}"#;
        assert_eq!(api_error_message(body, 401), "Invalid API Key provided");
    }

    #[test]
    fn test_api_error_message_falls_back_to_type() {
        let body = r#"{"error":{"type":"api_error"}}"#;
        assert_eq!(
            api_error_message(body, 500),
            "Payment processor error (api_error)"
        );
    }

    #[test]
    fn test_api_error_message_raw_body() {
        assert_eq!(api_error_message("Bad Gateway", 502), "Bad Gateway");
        assert_eq!(
            api_error_message("", 503),
            "Payment processor returned status 503"
        );
    }

    #[test]
    fn test_api_error_display_is_message() {
        let err = PaymentError::Api {
            status: 402,
            message: "Your card was declined.".to_string(),
        };
        assert_eq!(err.to_string(), "Your card was declined.");
    }
}
