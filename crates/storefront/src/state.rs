//! Application state shared across handlers.

use std::sync::Arc;

use atelier_core::{Catalog, CheckoutDefaults};

use crate::config::StorefrontConfig;
use crate::services::{PaymentError, StripeClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration, the catalog and the payment client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog<'static>,
    checkout_defaults: CheckoutDefaults,
    payments: StripeClient,
}

impl AppState {
    /// Create a new application state over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment client cannot be configured.
    pub fn new(config: StorefrontConfig) -> Result<Self, PaymentError> {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Create a new application state over a specific catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment client cannot be configured.
    pub fn with_catalog(
        config: StorefrontConfig,
        catalog: Catalog<'static>,
    ) -> Result<Self, PaymentError> {
        let payments = StripeClient::new(&config.stripe)?;
        let checkout_defaults = config.checkout_defaults();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                checkout_defaults,
                payments,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> Catalog<'static> {
        self.inner.catalog
    }

    /// Redirect URLs and currency for checkout sessions.
    #[must_use]
    pub fn checkout_defaults(&self) -> &CheckoutDefaults {
        &self.inner.checkout_defaults
    }

    /// Get a reference to the payment processor client.
    #[must_use]
    pub fn payments(&self) -> &StripeClient {
        &self.inner.payments
    }
}
