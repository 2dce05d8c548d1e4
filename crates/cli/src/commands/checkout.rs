//! Offline checkout payload preview.
//!
//! Shapes a `POST /api/checkout` body exactly as the storefront would and
//! prints the form parameters that would be sent to the payment processor,
//! without contacting it.
//!
//! # Usage
//!
//! ```bash
//! atelier checkout preview order.json
//! echo '{"items":[{"title":"Jeans","price":"$59.99"}]}' | atelier checkout preview -
//! ```

use std::fmt::Write as _;
use std::io::Read as _;
use std::path::Path;

use atelier_core::{CheckoutDefaults, CheckoutError, CheckoutRequest, CurrencyCode, Price, SessionRequest};
use thiserror::Error;

/// Errors that can occur while previewing a checkout.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The payload could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The payload is not JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload would be rejected by the checkout endpoint.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// Read a checkout payload from a file, or stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn read_payload(path: &Path) -> Result<String, PreviewError> {
    let io_error = |source| PreviewError::Io {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(io_error)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

/// Shape a payload and render the processor form parameters plus the total.
///
/// # Errors
///
/// Returns an error if the payload is not JSON or would be rejected.
pub fn preview(
    payload: &str,
    base_url: &str,
    currency: CurrencyCode,
) -> Result<String, PreviewError> {
    let request: CheckoutRequest = serde_json::from_str(payload)?;
    let defaults = CheckoutDefaults::new(base_url, currency);
    let session = SessionRequest::build(request, &defaults)?;

    tracing::debug!(lines = session.line_items.len(), "Checkout payload shaped");

    let mut out = String::new();
    for (key, value) in session.to_form_params() {
        let _ = writeln!(out, "{key}={value}");
    }
    let total = Price::from_cents(session.amount_total(), currency);
    let _ = write!(out, "\ntotal: {} ({} cents)", total.display(), total.cents());
    Ok(out)
}
