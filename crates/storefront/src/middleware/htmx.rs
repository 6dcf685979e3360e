//! HTMX request detection.
//!
//! Cart forms post through HTMX and get fragments back. The same forms
//! still work as plain HTML forms; those requests get a redirect to a full
//! page instead.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

/// Header HTMX sets on every request it issues.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// Whether the request came from HTMX.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(HxRequest(htmx): HxRequest) -> Response {
///     if htmx { fragment().into_response() } else { Redirect::to("/").into_response() }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(is_htmx(&parts.headers)))
    }
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}
