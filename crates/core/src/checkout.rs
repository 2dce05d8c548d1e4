//! Hosted-checkout request shaping.
//!
//! Turns the order summary a client posts (`{items, success_url, cancel_url}`)
//! into a payment-session request for the processor. Prices arrive as display
//! strings and are converted to cents here; nothing else on the request path
//! parses price strings.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::cart::CartSummary;
use crate::types::{CurrencyCode, PriceError, parse_cents};

/// Product name used when a line item has no title.
pub const DEFAULT_ITEM_NAME: &str = "Product";

/// Path of the confirmation page shown after payment.
pub const SUCCESS_PATH: &str = "/checkout/success";

/// Path of the page shown when the shopper abandons payment.
pub const CANCEL_PATH: &str = "/checkout/cancel";

/// Reasons a checkout payload is rejected before reaching the processor.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// `items` missing, not a list, or empty.
    #[error("No items provided")]
    NoItems,
    /// An entry of `items` is not a line item object.
    #[error("Invalid item at position {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
    /// An item's price has no usable number in it.
    #[error("Invalid price for item at position {index}: {source}")]
    InvalidPrice {
        index: usize,
        #[source]
        source: PriceError,
    },
}

/// Body of `POST /api/checkout`.
///
/// `items` is kept as raw JSON so that a missing or non-list value is reported
/// as [`CheckoutError::NoItems`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(default)]
    pub success_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
}

impl CheckoutRequest {
    /// Request for the given line items with default redirect URLs.
    #[must_use]
    pub fn from_items(items: &[LineItem]) -> Self {
        Self {
            items: serde_json::to_value(items).ok(),
            success_url: None,
            cancel_url: None,
        }
    }
}

/// One entry of the posted `items` list.
///
/// `id` is carried for the client's benefit only and may be any JSON value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub price: PriceInput,
    #[serde(
        default,
        deserialize_with = "whole_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<u32>,
}

/// Accepts integers and integral floats (`2.0`), as JSON clients send both.
fn whole_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(whole) = number.as_u64() {
        return u32::try_from(whole).map(Some).map_err(D::Error::custom);
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&float) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Some(float as u32))
        }
        _ => Err(D::Error::custom(format!(
            "quantity must be a whole number, got {number}"
        ))),
    }
}

/// A price as sent by a client: normally a display string, occasionally a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PriceInput {
    Text(String),
    Number(f64),
}

impl PriceInput {
    fn to_cents(&self) -> Result<i64, PriceError> {
        match self {
            Self::Text(text) => parse_cents(text),
            Self::Number(number) => parse_cents(&number.to_string()),
        }
    }
}

impl LineItems for CartSummary<'_> {
    fn line_items(&self) -> Vec<LineItem> {
        self.lines
            .iter()
            .map(|line| LineItem {
                id: Some(Value::from(i32::from(line.product.id))),
                title: Some(line.product.title.to_owned()),
                price: PriceInput::Text(line.product.price.display()),
                quantity: Some(line.quantity),
            })
            .collect()
    }
}

/// Anything that can be presented to checkout as line items.
pub trait LineItems {
    fn line_items(&self) -> Vec<LineItem>;
}

/// Settings the builder fills in when the client leaves them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDefaults {
    /// Public base URL of the site, e.g. `https://shop.example.com`.
    pub base_url: String,
    pub currency: CurrencyCode,
}

impl CheckoutDefaults {
    #[must_use]
    pub fn new(base_url: &str, currency: CurrencyCode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            currency,
        }
    }

    #[must_use]
    pub fn success_url(&self) -> String {
        format!("{}{SUCCESS_PATH}", self.base_url)
    }

    #[must_use]
    pub fn cancel_url(&self) -> String {
        format!("{}{CANCEL_PATH}", self.base_url)
    }
}

/// A line of the payment-session request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionLineItem {
    pub name: String,
    /// Unit price in minor units.
    pub unit_amount: i64,
    pub quantity: u32,
}

/// A fully shaped payment-session request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRequest {
    pub currency: CurrencyCode,
    pub line_items: Vec<SessionLineItem>,
    pub success_url: String,
    pub cancel_url: String,
}

impl SessionRequest {
    /// Shape a client payload into a session request.
    ///
    /// Quantities default to 1 when absent or zero; titles default to
    /// [`DEFAULT_ITEM_NAME`]; redirect URLs default to the site's confirmation
    /// pages.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::NoItems` when `items` is missing, not a list or
    /// empty, and the item-level variants when an entry is malformed.
    pub fn build(
        request: CheckoutRequest,
        defaults: &CheckoutDefaults,
    ) -> Result<Self, CheckoutError> {
        let Some(Value::Array(raw_items)) = request.items else {
            return Err(CheckoutError::NoItems);
        };
        if raw_items.is_empty() {
            return Err(CheckoutError::NoItems);
        }

        let line_items = raw_items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let item: LineItem = serde_json::from_value(raw)
                    .map_err(|e| CheckoutError::InvalidItem {
                        index,
                        reason: e.to_string(),
                    })?;
                let unit_amount = item
                    .price
                    .to_cents()
                    .map_err(|source| CheckoutError::InvalidPrice { index, source })?;

                Ok(SessionLineItem {
                    name: item
                        .title
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_owned()),
                    unit_amount,
                    quantity: item.quantity.filter(|q| *q > 0).unwrap_or(1),
                })
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;

        Ok(Self {
            currency: defaults.currency,
            line_items,
            success_url: non_empty(request.success_url).unwrap_or_else(|| defaults.success_url()),
            cancel_url: non_empty(request.cancel_url).unwrap_or_else(|| defaults.cancel_url()),
        })
    }

    /// Sum of `unit_amount × quantity` over all lines, in minor units.
    #[must_use]
    pub fn amount_total(&self) -> i64 {
        self.line_items
            .iter()
            .map(|item| item.unit_amount.saturating_mul(i64::from(item.quantity)))
            .sum()
    }

    /// Flatten into the processor's bracketed form encoding.
    ///
    /// ```text
    /// mode=payment
    /// payment_method_types[0]=card
    /// line_items[0][price_data][currency]=usd
    /// line_items[0][price_data][product_data][name]=Denim Jeans
    /// line_items[0][price_data][unit_amount]=5999
    /// line_items[0][quantity]=1
    /// success_url=...
    /// cancel_url=...
    /// ```
    #[must_use]
    pub fn to_form_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("mode".to_owned(), "payment".to_owned()),
            ("payment_method_types[0]".to_owned(), "card".to_owned()),
        ];

        for (i, item) in self.line_items.iter().enumerate() {
            let prefix = format!("line_items[{i}]");
            params.push((
                format!("{prefix}[price_data][currency]"),
                self.currency.api_code().to_owned(),
            ));
            params.push((
                format!("{prefix}[price_data][product_data][name]"),
                item.name.clone(),
            ));
            params.push((
                format!("{prefix}[price_data][unit_amount]"),
                item.unit_amount.to_string(),
            ));
            params.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
        }

        params.push(("success_url".to_owned(), self.success_url.clone()));
        params.push(("cancel_url".to_owned(), self.cancel_url.clone()));
        params
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::Catalog;
    use crate::types::ProductId;

    fn defaults() -> CheckoutDefaults {
        CheckoutDefaults::new("https://shop.example.com/", CurrencyCode::USD)
    }

    fn request(body: Value) -> CheckoutRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_prices_become_cents() {
        let session = SessionRequest::build(
            request(json!({
                "items": [
                    {"id": 1, "title": "Dress", "price": "$10.00", "quantity": 2},
                    {"id": 2, "title": "Top", "price": "$5.50", "quantity": 1}
                ]
            })),
            &defaults(),
        )
        .unwrap();

        let amounts: Vec<_> = session.line_items.iter().map(|i| i.unit_amount).collect();
        let quantities: Vec<_> = session.line_items.iter().map(|i| i.quantity).collect();
        assert_eq!(amounts, vec![1000, 550]);
        assert_eq!(quantities, vec![2, 1]);
        assert_eq!(session.amount_total(), 2550);
    }

    #[test]
    fn test_missing_items_rejected() {
        let err = SessionRequest::build(request(json!({})), &defaults()).unwrap_err();
        assert!(matches!(err, CheckoutError::NoItems));
        assert_eq!(err.to_string(), "No items provided");
    }

    #[test]
    fn test_non_list_items_rejected() {
        for items in [json!("abc"), json!({"price": "$1"}), json!(null), json!(3)] {
            let err = SessionRequest::build(request(json!({ "items": items })), &defaults())
                .unwrap_err();
            assert!(matches!(err, CheckoutError::NoItems));
        }
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = SessionRequest::build(request(json!({"items": []})), &defaults()).unwrap_err();
        assert!(matches!(err, CheckoutError::NoItems));
    }

    #[test]
    fn test_defaults_fill_gaps() {
        let session = SessionRequest::build(
            request(json!({"items": [{"price": "$3.00"}, {"price": "$4", "quantity": 0, "title": ""}]})),
            &defaults(),
        )
        .unwrap();

        assert_eq!(session.line_items[0].quantity, 1);
        assert_eq!(session.line_items[0].name, "Product");
        assert_eq!(session.line_items[1].quantity, 1);
        assert_eq!(session.line_items[1].name, "Product");
        assert_eq!(session.success_url, "https://shop.example.com/checkout/success");
        assert_eq!(session.cancel_url, "https://shop.example.com/checkout/cancel");
        assert_eq!(session.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_explicit_redirects_win() {
        let session = SessionRequest::build(
            request(json!({
                "items": [{"price": "$3.00"}],
                "success_url": "https://other.example/ok",
                "cancel_url": "https://other.example/cart"
            })),
            &defaults(),
        )
        .unwrap();
        assert_eq!(session.success_url, "https://other.example/ok");
        assert_eq!(session.cancel_url, "https://other.example/cart");
    }

    #[test]
    fn test_numeric_price_accepted() {
        let session =
            SessionRequest::build(request(json!({"items": [{"price": 12.5}]})), &defaults())
                .unwrap();
        assert_eq!(session.line_items[0].unit_amount, 1250);
    }

    #[test]
    fn test_item_ids_are_opaque() {
        let session = SessionRequest::build(
            request(json!({
                "items": [
                    {"id": "sku-1", "title": "Scarf", "price": "$10.00", "quantity": 1},
                    {"id": {"sku": 7}, "price": "$2.00"}
                ]
            })),
            &defaults(),
        )
        .unwrap();
        assert_eq!(session.line_items.len(), 2);
        assert_eq!(session.line_items[0].name, "Scarf");
        assert_eq!(session.amount_total(), 1200);
    }

    #[test]
    fn test_integral_float_quantity_accepted() {
        let session = SessionRequest::build(
            request(json!({"items": [{"price": "$10.00", "quantity": 2.0}]})),
            &defaults(),
        )
        .unwrap();
        assert_eq!(session.line_items[0].quantity, 2);
        assert_eq!(session.amount_total(), 2000);
    }

    #[test]
    fn test_fractional_quantity_rejected() {
        for quantity in [json!(1.5), json!(-2), json!("two")] {
            let err = SessionRequest::build(
                request(json!({"items": [{"price": "$1", "quantity": quantity}]})),
                &defaults(),
            )
            .unwrap_err();
            assert!(matches!(err, CheckoutError::InvalidItem { index: 0, .. }));
        }
    }

    #[test]
    fn test_bad_price_reports_position() {
        let err = SessionRequest::build(
            request(json!({"items": [{"price": "$1"}, {"price": "free"}]})),
            &defaults(),
        )
        .unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidPrice { index: 1, .. }));
    }

    #[test]
    fn test_non_object_item_rejected() {
        let err =
            SessionRequest::build(request(json!({"items": ["$1"]})), &defaults()).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidItem { index: 0, .. }));
    }

    #[test]
    fn test_form_params_layout() {
        let session = SessionRequest::build(
            request(json!({"items": [{"title": "Denim Jeans", "price": "$59.99", "quantity": 2}]})),
            &defaults(),
        )
        .unwrap();
        let params = session.to_form_params();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("mode"), "payment");
        assert_eq!(get("payment_method_types[0]"), "card");
        assert_eq!(get("line_items[0][price_data][currency]"), "usd");
        assert_eq!(get("line_items[0][price_data][product_data][name]"), "Denim Jeans");
        assert_eq!(get("line_items[0][price_data][unit_amount]"), "5999");
        assert_eq!(get("line_items[0][quantity]"), "2");
        assert_eq!(get("success_url"), "https://shop.example.com/checkout/success");
    }

    #[test]
    fn test_cart_summary_line_items() {
        let catalog = Catalog::builtin();
        let ids = [ProductId::new(8), ProductId::new(8), ProductId::new(13)];
        let summary = CartSummary::build(&ids, &catalog);

        let session = SessionRequest::build(
            CheckoutRequest::from_items(&summary.line_items()),
            &defaults(),
        )
        .unwrap();

        assert_eq!(session.line_items.len(), 2);
        assert_eq!(session.line_items[0].name, "Denim Jeans");
        assert_eq!(session.line_items[0].unit_amount, 5999);
        assert_eq!(session.line_items[0].quantity, 2);
        assert_eq!(session.amount_total(), summary.total().cents());
    }
}
