//! Persisted cart of product identifiers.
//!
//! A cart is an ordered list of [`ProductId`]s stored as a JSON array under
//! a single key (`cartItems`). Where it is stored is up to the
//! [`CartStorage`] implementation: the storefront keeps it in the visitor's
//! session, tests and the CLI use [`MemoryStorage`].
//!
//! Every mutation re-reads the stored list, writes the new one back and hands
//! the full list to each registered observer. Observers never receive deltas.
//!
//! Storage problems never surface to callers. An unreadable or malformed value
//! reads as an empty cart; a failed write is logged and the mutation carries on.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, Product};
use crate::types::{CurrencyCode, Price, ProductId};

/// Storage key holding the JSON-encoded id list.
pub const CART_STORAGE_KEY: &str = "cartItems";

/// Errors a [`CartStorage`] backend can report.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the write.
    #[error("storage write rejected: {0}")]
    Rejected(String),
}

/// Raw key/value persistence for carts.
pub trait CartStorage {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-process storage backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value, e.g. one left by an older client.
    #[must_use]
    pub fn with_raw(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Callback invoked with the full cart after every mutation.
pub type Observer = Box<dyn Fn(&[ProductId]) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// The cart store: persisted id list plus change observers.
pub struct CartStore<S> {
    storage: S,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl<S: CartStorage> CartStore<S> {
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Register an observer. It is called after every subsequent mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: Fn(&[ProductId]) + Send + Sync + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() != before
    }

    /// Current ids in insertion order. Empty when unset or unreadable.
    pub fn get(&self) -> Vec<ProductId> {
        let raw = match self.storage.read(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Stored cart is not an id list, treating as empty");
            Vec::new()
        })
    }

    /// Append `id` unless it is already in the cart.
    ///
    /// Returns `true` if the cart changed. Observers are only notified on change.
    pub fn add(&mut self, id: ProductId) -> bool {
        let mut items = self.get();
        if items.contains(&id) {
            return false;
        }
        items.push(id);
        self.commit(&items);
        true
    }

    /// Drop every occurrence of `id`.
    ///
    /// Always persists and notifies. Returns `true` if anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let mut items = self.get();
        let before = items.len();
        items.retain(|item| *item != id);
        let removed = items.len() != before;
        self.commit(&items);
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.commit(&[]);
    }

    fn commit(&self, items: &[ProductId]) {
        match serde_json::to_string(items) {
            Ok(raw) => {
                if let Err(e) = self.storage.write(CART_STORAGE_KEY, &raw) {
                    tracing::warn!(error = %e, "Failed to persist cart");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to encode cart"),
        }

        for (_, observer) in &self.observers {
            observer(items);
        }
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// One product in a cart summary.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    /// Occurrences of the product id in the stored list.
    pub quantity: u32,
}

impl CartLine<'_> {
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// A cart reconciled against the catalog.
///
/// Lines follow catalog order. Ids that are not in the catalog are dropped.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary<'a> {
    pub lines: Vec<CartLine<'a>>,
}

impl<'a> CartSummary<'a> {
    #[must_use]
    pub fn build(items: &[ProductId], catalog: &Catalog<'a>) -> Self {
        let lines = catalog
            .all()
            .iter()
            .filter_map(|product| {
                let count = items.iter().filter(|id| **id == product.id).count();
                (count > 0).then(|| CartLine {
                    product,
                    quantity: u32::try_from(count).unwrap_or(u32::MAX),
                })
            })
            .collect();

        Self { lines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |line| line.product.price.currency());
        self.lines
            .iter()
            .fold(Price::zero(currency), |total, line| total.plus(line.line_total()))
    }
}
