//! Theme preference extractor.
//!
//! The visitor's saved choice lives in their session under
//! [`THEME_PREFERENCE_KEY`]. With nothing saved, the browser's
//! `Sec-CH-Prefers-Color-Scheme` client hint decides.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use quill_core::Theme;
use tower_sessions::Session;

use super::session_keys::THEME_PREFERENCE_KEY;

/// Client-hint header carrying the system color scheme.
pub const PREFERS_COLOR_SCHEME_HEADER: &str = "sec-ch-prefers-color-scheme";

/// Extractor for the theme to render.
///
/// Never rejects: a missing session or unreadable value falls back to the
/// system hint.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentTheme(theme): CurrentTheme) -> impl IntoResponse {
///     format!("rendering in {theme} mode")
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrentTheme(pub Theme);

impl<S> FromRequestParts<S> for CurrentTheme
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let stored = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<String>(THEME_PREFERENCE_KEY)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(Theme::preferred(
            stored.as_deref(),
            system_prefers_dark(&parts.headers),
        )))
    }
}

/// Save the visitor's theme in their session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_theme(
    session: &Session,
    theme: Theme,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(THEME_PREFERENCE_KEY, theme.as_str()).await
}

/// Read the color-scheme client hint. The value may be quoted (`"dark"`).
fn system_prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(PREFERS_COLOR_SCHEME_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(PREFERS_COLOR_SCHEME_HEADER, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_system_prefers_dark() {
        assert!(system_prefers_dark(&headers("dark")));
        assert!(system_prefers_dark(&headers("\"dark\"")));
        assert!(!system_prefers_dark(&headers("light")));
        assert!(!system_prefers_dark(&HeaderMap::new()));
    }
}
