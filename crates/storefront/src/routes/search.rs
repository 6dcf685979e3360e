//! Search modal route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use super::home::{self, GridQuery};
use crate::error::Result;
use crate::middleware::{CurrentTheme, HxRequest};
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Search modal fragment template.
///
/// The form submits to the product grid, which filters by `q`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_modal.html")]
pub struct SearchModalTemplate {
    pub search: String,
}

/// Display the search modal.
///
/// HTMX requests get the modal fragment; plain requests get the home page
/// with the modal open.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn modal(
    State(state): State<AppState>,
    CurrentTheme(theme): CurrentTheme,
    HxRequest(htmx): HxRequest,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<Response> {
    let search = query.q.unwrap_or_default();
    if htmx {
        return Ok(SearchModalTemplate { search }.into_response());
    }

    let mut page = home::page(&state, theme, &session, &GridQuery::default(), None).await?;
    page.search_modal = Some(search);
    Ok(page.into_response())
}

/// Dismiss whichever modal is open (HTMX swaps the empty body into `#modal`).
pub async fn close() -> &'static str {
    ""
}
