//! Product grid route handlers: the home page and category pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use quill_core::{Category, Product, SortOrder, Theme, ViewMode, catalog};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::cart::{self, CartView, CheckoutOutcome};
use super::products::ProductView;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CurrentTheme;
use crate::state::AppState;

/// Grid query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GridQuery {
    pub sort: Option<String>,
    pub view: Option<String>,
    pub q: Option<String>,
}

/// One entry in the sort select box.
#[derive(Clone)]
pub struct SortOptionView {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One entry in the category navigation.
#[derive(Clone)]
pub struct CategoryLinkView {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Product grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct GridTemplate {
    pub theme: Theme,
    pub heading: String,
    /// Path the sort/view/search controls submit to.
    pub base_path: String,
    pub products: Vec<ProductView>,
    pub sort_options: Vec<SortOptionView>,
    pub categories: Vec<CategoryLinkView>,
    pub view: ViewMode,
    pub query: String,
    pub cart: CartView,
    /// Checkout result carried over from a non-HTMX checkout.
    pub checkout: Option<CheckoutOutcome>,
    /// Product shown in an open quick-view modal.
    pub quick_view: Option<ProductView>,
    /// Query of an open search modal.
    pub search_modal: Option<String>,
}

/// Display the home page with every product.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    session: Session,
    Query(query): Query<GridQuery>,
) -> Result<GridTemplate> {
    page(&state, theme, &session, &query, None).await
}

/// Display one category's products.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown category.
#[instrument(skip(state, session))]
pub async fn category(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    session: Session,
    Path(slug): Path<String>,
    Query(query): Query<GridQuery>,
) -> Result<GridTemplate> {
    let category = slug
        .parse::<Category>()
        .map_err(|_| AppError::NotFound(format!("category {slug}")))?;
    page(&state, theme, &session, &query, Some(category)).await
}

/// The product grid with the visitor's cart and any pending checkout result.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn page(
    state: &AppState,
    theme: Theme,
    session: &Session,
    query: &GridQuery,
    category: Option<Category>,
) -> Result<GridTemplate> {
    let mut grid = render_grid(state, theme, query, category);
    grid.cart = cart::current_cart(state, session).await;
    grid.checkout = cart::take_checkout_outcome(session).await?;
    Ok(grid)
}

/// Filter, sort and lay out the catalog for one request.
fn render_grid(
    state: &AppState,
    theme: Theme,
    query: &GridQuery,
    category: Option<Category>,
) -> GridTemplate {
    let sort = SortOrder::from_key(query.sort.as_deref().unwrap_or_default());
    let view = ViewMode::from_key(query.view.as_deref().unwrap_or_default());
    let term = query.q.as_deref().unwrap_or_default().trim().to_string();

    let in_category: Vec<Product> = state
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .cloned()
        .collect();
    let products: Vec<ProductView> = sort
        .apply(&catalog::filter(&in_category, &term))
        .iter()
        .map(ProductView::from)
        .collect();

    tracing::debug!(
        sort = sort.key(),
        view = view.key(),
        term = %term,
        results = products.len(),
        "Rendering product grid"
    );

    GridTemplate {
        theme,
        heading: category.map_or_else(|| "Featured Products".to_string(), |c| c.label().to_string()),
        base_path: category.map_or_else(|| "/".to_string(), |c| format!("/categories/{}", c.as_str())),
        products,
        sort_options: SortOrder::ALL
            .into_iter()
            .map(|order| SortOptionView {
                key: order.key(),
                label: order.label(),
                selected: order == sort,
            })
            .collect(),
        categories: Category::ALL
            .into_iter()
            .map(|c| CategoryLinkView {
                slug: c.as_str(),
                label: c.label(),
                active: Some(c) == category,
            })
            .collect(),
        view,
        query: term,
        cart: CartView::empty(),
        checkout: None,
        quick_view: None,
        search_modal: None,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StorefrontConfig;

    use super::*;

    fn names(template: &GridTemplate) -> Vec<&str> {
        template.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_grid_defaults() {
        let state = AppState::new(StorefrontConfig::default());
        let grid = render_grid(&state, Theme::Light, &GridQuery::default(), None);

        assert_eq!(grid.products.len(), state.products().len());
        assert_eq!(grid.view, ViewMode::Grid);
        assert!(grid.sort_options.iter().any(|o| o.key == "featured" && o.selected));
        assert_eq!(grid.base_path, "/");
        assert!(grid.cart.items.is_empty());
        assert!(grid.checkout.is_none() && grid.quick_view.is_none() && grid.search_modal.is_none());
    }

    #[test]
    fn test_grid_sort_and_search() {
        let state = AppState::new(StorefrontConfig::default());
        let query = GridQuery {
            sort: Some("price-low".to_string()),
            view: Some("list".to_string()),
            q: Some("  notebook ".to_string()),
        };
        let grid = render_grid(&state, Theme::Dark, &query, None);

        assert!(grid.view.is_list());
        assert_eq!(grid.query, "notebook");
        assert_eq!(names(&grid).first(), Some(&"Spiral Bound Notebook"));
        assert!(grid.products.iter().all(|p| {
            p.name.to_lowercase().contains("notebook")
                || p.description.to_lowercase().contains("notebook")
        }));
    }

    #[test]
    fn test_grid_category_filter() {
        let state = AppState::new(StorefrontConfig::default());
        let grid = render_grid(
            &state,
            Theme::Light,
            &GridQuery::default(),
            Some(Category::Planners),
        );

        assert_eq!(names(&grid), ["Weekly Planner 2025", "Monthly Goal Planner"]);
        assert_eq!(grid.heading, "Planners");
        assert_eq!(grid.base_path, "/categories/planners");
        assert!(grid.categories.iter().any(|c| c.slug == "planners" && c.active));
    }
}
