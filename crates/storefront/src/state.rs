//! Application state shared across handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use quill_core::{CartStore, Product};
use uuid::Uuid;

use crate::catalog::{self, StoreImages};
use crate::config::StorefrontConfig;

/// Identifies one visitor's cart. Stored in their session.
pub type CartId = Uuid;

/// A visitor's cart. Every cart shares the one image table.
pub type Cart = CartStore<Arc<StoreImages>>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Carts are keyed by the
/// [`CartId`] held in each visitor's session, so a new session always
/// starts with an empty cart.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    images: Arc<StoreImages>,
    products: Vec<Product>,
    carts: Mutex<HashMap<CartId, Cart>>,
}

impl AppState {
    /// Create a new application state with no carts.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let images = Arc::new(catalog::image_resolver());
        let products = catalog::products(&*images);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                images,
                products,
                carts: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// All catalog products in featured order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Run `f` with exclusive access to the cart for `id`.
    ///
    /// A visitor with no cart id, or an id with nothing stored, gets a fresh
    /// empty cart. Carts left empty afterwards are dropped rather than kept.
    ///
    /// The lock is held for the whole closure, so a mutation and any
    /// snapshot taken inside it are atomic with respect to other requests.
    /// `f` is synchronous; nothing can suspend while the carts are locked.
    pub fn with_cart<T>(&self, id: Option<CartId>, f: impl FnOnce(&mut Cart) -> T) -> T {
        let Some(id) = id else {
            return f(&mut self.empty_cart());
        };

        // Cart operations never panic mid-mutation, so a poisoned lock
        // still guards consistent carts.
        let mut carts = self
            .inner
            .carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let cart = carts.entry(id).or_insert_with(|| self.empty_cart());
        let result = f(cart);
        if cart.is_empty() {
            carts.remove(&id);
        }
        result
    }

    /// Number of carts currently holding items.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.inner
            .carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn empty_cart(&self) -> Cart {
        CartStore::new(Arc::clone(&self.inner.images))
    }
}
