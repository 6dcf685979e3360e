//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Product grid (?sort=&view=&q=)
//! GET  /categories/{category}         - Product grid for one category
//! GET  /health                        - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products/{slug}/quick-view    - Quick view modal
//! GET  /search                        - Search modal
//! GET  /modal/close                   - Empty fragment that dismisses a modal
//!
//! # Cart (HTMX fragments)
//! GET  /cart                          - Cart panel (items + summary)
//! GET  /cart/count                    - Cart count badge
//! POST /cart/add                      - Add one unit (returns badge, triggers cart-updated)
//! POST /cart/remove                   - Remove a line (returns cart panel, triggers cart-updated)
//! POST /cart/checkout                 - Place the order (returns confirmation or empty notice)
//!
//! # Preferences
//! POST /theme/toggle                  - Flip light/dark, redirect to /
//! ```
//!
//! Modal and cart routes answer plain (non-HTMX) requests with full pages
//! or redirects, so every form works before HTMX loads.

pub mod cart;
pub mod home;
pub mod products;
pub mod search;
pub mod theme;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{slug}/quick-view", get(products::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/categories/{category}", get(home::category))
        .route("/search", get(search::modal))
        .route("/modal/close", get(search::close))
        .route("/theme/toggle", post(theme::toggle))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
}
