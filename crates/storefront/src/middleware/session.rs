//! Session middleware configuration.
//!
//! Sessions carry the visitor's cart id, theme preference, and the result of
//! a checkout made without HTMX. They are kept in process memory and vanish
//! on restart.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Keys for values stored in the session.
pub mod session_keys {
    pub use quill_core::theme::THEME_PREFERENCE_KEY;

    /// The visitor's [`CartId`](crate::state::CartId).
    pub const CART_ID: &str = "cart_id";

    /// Checkout result waiting to be shown on the next page load.
    pub const CHECKOUT_OUTCOME: &str = "checkout_outcome";
}

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "quill_session";

/// Session expiry time in days.
const SESSION_EXPIRY_DAYS: i64 = 365;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::days(SESSION_EXPIRY_DAYS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
