//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use quill_core::{Product, catalog};
use tower_sessions::Session;
use tracing::instrument;

use super::home::{self, GridQuery};
use crate::error::{AppError, Result};
use crate::middleware::{CurrentTheme, HxRequest};
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    /// Formatted for display, e.g. `$12.99`.
    pub price: String,
    /// Plain decimal posted by add-to-cart buttons, e.g. `12.99`.
    pub price_value: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            category: product.category.label().to_string(),
            price: product.price.display(),
            price_value: product.price.plain(),
            image: product.image.clone(),
        }
    }
}

/// Quick view modal fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub product: ProductView,
}

/// Display the quick view modal for one product.
///
/// HTMX requests get the modal fragment. A plain request (the quick-view
/// link followed without HTMX) gets the home page with the modal open.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown slug.
#[instrument(skip(state, session))]
pub async fn quick_view(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    HxRequest(htmx): HxRequest,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response> {
    let product = catalog::find_by_slug(state.products(), &slug)
        .map(ProductView::from)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    if htmx {
        return Ok(QuickViewTemplate { product }.into_response());
    }

    let mut page = home::page(&state, theme, &session, &GridQuery::default(), None).await?;
    page.quick_view = Some(product);
    Ok(page.into_response())
}
