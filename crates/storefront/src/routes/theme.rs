//! Theme toggle route handler.

use axum::response::Redirect;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{CurrentTheme, store_theme};

/// Flip between light and dark and remember the choice.
///
/// Redirects back to the home page, which renders with the new theme.
#[instrument(skip(session))]
pub async fn toggle(CurrentTheme(theme): CurrentTheme, session: Session) -> Result<Redirect> {
    let next = theme.toggled();
    store_theme(&session, next).await?;
    tracing::debug!(from = %theme, to = %next, "Theme toggled");
    Ok(Redirect::to("/"))
}
