//! Session-backed cart persistence.
//!
//! The visitor's cart lives in their session under the `cartItems` key as the
//! same JSON id list a browser would keep in local storage. A request loads
//! that value into a [`SessionStorage`] snapshot, runs [`CartStore`]
//! operations against it, then [`SessionCart::save`] writes the snapshot back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use atelier_core::cart::{CART_STORAGE_KEY, CartStorage, CartStore, StorageError};
use atelier_core::{Catalog, CartSummary, ProductId};
use tower_sessions::Session;

/// Request-local copy of the session's cart value.
#[derive(Debug, Default)]
pub struct SessionStorage {
    raw: Mutex<Option<String>>,
}

impl SessionStorage {
    fn snapshot(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStorage for SessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if key != CART_STORAGE_KEY {
            return Ok(None);
        }
        Ok(self.snapshot())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key != CART_STORAGE_KEY {
            return Err(StorageError::Rejected(format!("unknown key {key}")));
        }
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_owned());
        Ok(())
    }
}

/// A visitor's cart for the duration of one request.
pub struct SessionCart {
    session: Session,
    store: CartStore<SessionStorage>,
    changed: Arc<AtomicBool>,
}

impl SessionCart {
    /// Load the cart from the session. Read failures yield an empty cart.
    pub async fn load(session: Session) -> Self {
        let raw = match session.get::<String>(CART_STORAGE_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart from session");
                None
            }
        };

        let storage = SessionStorage {
            raw: Mutex::new(raw),
        };
        let mut store = CartStore::new(storage);

        // Any mutation marks the snapshot for write-back.
        let changed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&changed);
        store.subscribe(move |items| {
            flag.store(true, Ordering::Release);
            tracing::debug!(items = items.len(), "Cart updated");
        });

        Self {
            session,
            store,
            changed,
        }
    }

    pub fn items(&self) -> Vec<ProductId> {
        self.store.get()
    }

    pub fn summary<'a>(&self, catalog: &Catalog<'a>) -> CartSummary<'a> {
        CartSummary::build(&self.items(), catalog)
    }

    /// Observe later mutations in addition to the write-back flag.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&[ProductId]) + Send + Sync + 'static,
    {
        self.store.subscribe(observer);
    }

    pub fn add(&mut self, id: ProductId) -> bool {
        self.store.add(id)
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        self.store.remove(id)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Whether any mutation happened since [`load`](Self::load).
    pub fn is_changed(&self) -> bool {
        self.changed.load(Ordering::Acquire)
    }

    /// Write the snapshot back to the session if it changed.
    ///
    /// Write failures are logged and otherwise ignored.
    pub async fn save(self) {
        if !self.is_changed() {
            return;
        }
        let Some(raw) = self.store.storage().snapshot() else {
            return;
        };
        if let Err(e) = self.session.insert(CART_STORAGE_KEY, raw).await {
            tracing::warn!(error = %e, "Failed to save cart to session");
        }
    }
}
