//! Cart route handlers.
//!
//! Each visitor's cart is found through the [`CartId`] in their session.
//! Cart operations use HTMX for dynamic updates without full page reloads;
//! the same forms posted without HTMX get a redirect to a full page.
//! Every mutating handler changes the cart and takes its display snapshot
//! under a single lock, then renders outside it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use quill_core::{CartError, CartStore, CartSummary, ImageResolver, LineItem, Price};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{HxRequest, session_keys};
use crate::state::{AppState, CartId};

/// HTMX event fired whenever the cart changes.
pub const CART_UPDATED_TRIGGER: (&str, &str) = ("HX-Trigger", "cart-updated");

/// Where plain form posts land: the home page with the cart open.
pub const CART_PAGE: &str = "/#cart";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub total: String,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(&[], CartSummary::EMPTY)
    }

    fn from_parts(items: &[LineItem], summary: CartSummary) -> Self {
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            item_count: summary.item_count,
            total: summary.total.display(),
        }
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl<R: ImageResolver> From<&CartStore<R>> for CartView {
    fn from(cart: &CartStore<R>) -> Self {
        Self::from_parts(cart.items(), cart.summary())
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            image: item.image_ref.clone(),
            price: item.unit_price.display(),
            quantity: item.quantity.get(),
            line_price: item.line_total().display(),
        }
    }
}

/// Add to cart form data.
///
/// `price` is the plain decimal from the button, validated here before the
/// cart ever sees it.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product: String,
    pub price: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product: String,
}

/// Result of a checkout attempt, as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    /// `false` when checkout was attempted on an empty cart.
    pub confirmed: bool,
    pub item_count: u64,
    pub total: String,
}

impl CheckoutOutcome {
    /// Confirmation for a placed order.
    #[must_use]
    pub fn confirmed(summary: CartSummary) -> Self {
        Self {
            confirmed: true,
            item_count: summary.item_count,
            total: summary.total.display(),
        }
    }

    /// Notice for an empty cart.
    #[must_use]
    pub fn empty_cart() -> Self {
        Self {
            confirmed: false,
            item_count: 0,
            total: Price::ZERO.display(),
        }
    }
}

impl From<std::result::Result<CartSummary, CartError>> for CheckoutOutcome {
    fn from(result: std::result::Result<CartSummary, CartError>) -> Self {
        match result {
            Ok(summary) => Self::confirmed(summary),
            Err(CartError::Empty) => Self::empty_cart(),
        }
    }
}

/// Cart panel fragment template: item list plus summary.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Checkout result fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutTemplate {
    pub outcome: CheckoutOutcome,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart ID from the session.
async fn get_cart_id(session: &Session) -> Option<CartId> {
    session
        .get::<CartId>(session_keys::CART_ID)
        .await
        .ok()
        .flatten()
}

/// Get the cart ID from the session, assigning a new one if there is none.
async fn ensure_cart_id(session: &Session) -> Result<CartId> {
    if let Some(id) = get_cart_id(session).await {
        return Ok(id);
    }
    let id = CartId::new_v4();
    session.insert(session_keys::CART_ID, id).await?;
    tracing::debug!(cart_id = %id, "Assigned cart");
    Ok(id)
}

/// Snapshot of the visitor's cart for rendering.
pub async fn current_cart(state: &AppState, session: &Session) -> CartView {
    let id = get_cart_id(session).await;
    state.with_cart(id, |cart| CartView::from(&*cart))
}

/// Take the checkout result left by a non-HTMX checkout, if any.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn take_checkout_outcome(session: &Session) -> Result<Option<CheckoutOutcome>> {
    let outcome = session
        .get::<CheckoutOutcome>(session_keys::CHECKOUT_OUTCOME)
        .await?;
    // Only touch the session when there is something to clear
    if outcome.is_some() {
        session
            .remove_value(session_keys::CHECKOUT_OUTCOME)
            .await?;
    }
    Ok(outcome)
}

/// Product names arrive verbatim from the form; only blank ones are refused.
fn require_product(product: &str) -> Result<&str> {
    if product.trim().is_empty() {
        return Err(AppError::BadRequest("product name is required".to_string()));
    }
    Ok(product)
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart panel (HTMX).
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> CartPanelTemplate {
    CartPanelTemplate {
        cart: current_cart(&state, &session).await,
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> CartCountTemplate {
    let id = get_cart_id(&session).await;
    let count = state.with_cart(id, |cart| cart.summary().item_count);
    CartCountTemplate { count }
}

/// Add one unit of a product to the cart.
///
/// HTMX requests get the updated count badge and an HTMX trigger so the
/// cart panel refreshes itself. Plain form posts are redirected to the
/// home page.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a blank product name and
/// `AppError::InvalidPrice` for a price that is not a non-negative decimal.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    HxRequest(htmx): HxRequest,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let name = require_product(&form.product)?;
    let price = Price::parse(&form.price)?;

    let id = ensure_cart_id(&session).await?;
    let count = state.with_cart(Some(id), |cart| {
        cart.add_item(name, price);
        cart.summary().item_count
    });

    add_breadcrumb("cart", "Added to cart", Some(&[("product", name)]));

    if !htmx {
        return Ok(Redirect::to("/").into_response());
    }
    Ok((AppendHeaders([CART_UPDATED_TRIGGER]), CartCountTemplate { count }).into_response())
}

/// Remove a product's line from the cart.
///
/// Removing a product that is not in the cart is not an error. HTMX
/// requests get the refreshed cart panel; plain form posts are redirected
/// to the open cart.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a blank product name.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    HxRequest(htmx): HxRequest,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let name = require_product(&form.product)?;

    let id = get_cart_id(&session).await;
    let cart = state.with_cart(id, |cart| {
        cart.remove_item(name);
        CartView::from(&*cart)
    });

    add_breadcrumb("cart", "Removed from cart", Some(&[("product", name)]));

    if !htmx {
        return Ok(Redirect::to(CART_PAGE).into_response());
    }
    Ok((AppendHeaders([CART_UPDATED_TRIGGER]), CartPanelTemplate { cart }).into_response())
}

/// Place the order.
///
/// On success the cart is emptied and a confirmation with the captured
/// total is shown. An empty cart gets a distinct notice and nothing
/// changes. Without HTMX the result is kept in the session and shown by
/// the page the visitor is redirected to.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    HxRequest(htmx): HxRequest,
    session: Session,
) -> Result<Response> {
    let id = get_cart_id(&session).await;
    let outcome = CheckoutOutcome::from(state.with_cart(id, |cart| cart.checkout()));

    if outcome.confirmed {
        add_breadcrumb("cart", "Checked out", None);
    } else {
        tracing::info!("Checkout attempted with empty cart");
    }

    if !htmx {
        session
            .insert(session_keys::CHECKOUT_OUTCOME, &outcome)
            .await?;
        return Ok(Redirect::to(CART_PAGE).into_response());
    }

    let confirmed = outcome.confirmed;
    let template = CheckoutTemplate { outcome };
    if confirmed {
        Ok((AppendHeaders([CART_UPDATED_TRIGGER]), template).into_response())
    } else {
        Ok(template.into_response())
    }
}

#[cfg(test)]
mod tests {
    use quill_core::TableImageResolver;

    use super::*;

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, "$0.00");
    }

    #[test]
    fn test_view_from_cart() {
        let mut cart = CartStore::new(TableImageResolver::new(&[("Pen", "assets/images/pen1.jpg")]));
        cart.add_item("Pen", Price::from_cents(250));
        cart.add_item("Pen", Price::from_cents(250));
        cart.add_item("Notebook", Price::from_cents(999));

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "$14.99");

        let pen = view.items.first().map(|i| (i.name.as_str(), i.price.as_str(), i.quantity));
        assert_eq!(pen, Some(("Pen", "$2.50", 2)));
        assert_eq!(view.items.last().map(|i| i.image.as_str()), Some("assets/images/nb1.jpg"));
    }

    #[test]
    fn test_empty_cart_panel_renders_placeholder() {
        let html = CartPanelTemplate {
            cart: CartView::empty(),
        }
        .render()
        .unwrap_or_default();

        assert!(html.contains("Your cart is empty"));
        assert!(!html.contains("cart-item-info"));
    }

    #[test]
    fn test_cart_panel_renders_rows() {
        let mut cart = CartStore::new(TableImageResolver::new(&[]));
        cart.add_item("Pen", Price::from_cents(250));
        cart.add_item("Pen", Price::from_cents(250));

        let html = CartPanelTemplate {
            cart: CartView::from(&cart),
        }
        .render()
        .unwrap_or_default();

        assert!(html.contains("Pen"));
        assert!(html.contains("$2.50 × 2"));
        assert!(html.contains("$5.00"));
        assert!(!html.contains("Your cart is empty"));
    }

    #[test]
    fn test_checkout_templates() {
        let html = CheckoutTemplate {
            outcome: CheckoutOutcome::confirmed(CartSummary::new(1, Price::from_cents(999))),
        }
        .render()
        .unwrap_or_default();
        assert!(html.contains("Thank you for your order!"));
        assert!(html.contains("$9.99"));

        let html = CheckoutTemplate {
            outcome: CheckoutOutcome::empty_cart(),
        }
        .render()
        .unwrap_or_default();
        assert!(html.contains("Your cart is empty!"));
        assert!(!html.contains("Thank you"));
    }

    #[test]
    fn test_checkout_outcome_from_result() {
        let outcome = CheckoutOutcome::from(Ok(CartSummary::new(3, Price::from_cents(1499))));
        assert!(outcome.confirmed);
        assert_eq!(outcome.item_count, 3);
        assert_eq!(outcome.total, "$14.99");

        assert_eq!(CheckoutOutcome::from(Err(CartError::Empty)), CheckoutOutcome::empty_cart());
    }

    #[test]
    fn test_require_product_keeps_name_verbatim() {
        assert_eq!(require_product(" Pen ").ok(), Some(" Pen "));
        assert!(matches!(require_product("   "), Err(AppError::BadRequest(_))));
        assert!(matches!(require_product(""), Err(AppError::BadRequest(_))));
    }
}
