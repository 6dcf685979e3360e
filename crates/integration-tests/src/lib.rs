//! Integration tests for the Quill & Co. storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quill-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart store behavior across whole operation sequences
//! - `storefront_routes` - In-process requests against the full router

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use quill_storefront::{config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// Largest response body the helpers will buffer.
const BODY_LIMIT: usize = 1024 * 1024;

/// Build a fresh router with no carts.
#[must_use]
pub fn test_app() -> Router {
    quill_storefront::app(AppState::new(StorefrontConfig::default()))
}

/// One browser talking to the app: keeps its session cookie between
/// requests and optionally identifies as HTMX.
pub struct Visitor {
    app: Router,
    cookie: Option<String>,
    htmx: bool,
}

impl Visitor {
    /// A visitor whose requests come from HTMX.
    #[must_use]
    pub fn new(app: &Router) -> Self {
        Self {
            app: app.clone(),
            cookie: None,
            htmx: true,
        }
    }

    /// A visitor using plain HTML forms and links.
    #[must_use]
    pub fn without_htmx(app: &Router) -> Self {
        Self {
            htmx: false,
            ..Self::new(app)
        }
    }

    /// The session cookie (`name=value`), once the app has set one.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri), Body::empty()).await
    }

    /// Send a form-encoded POST request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> Response<Body> {
        let builder =
            Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(builder, Body::from(form.to_string())).await
    }

    /// Send a request with this visitor's cookie and HTMX header attached.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the router fails.
    pub async fn send(&mut self, mut builder: axum::http::request::Builder, body: Body) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if self.htmx {
            builder = builder.header("hx-request", "true");
        }
        let request = builder.body(body).expect("valid request");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .filter(|cookie| !cookie.ends_with('='))
        {
            self.cookie = Some(cookie.to_string());
        }
        response
    }
}

/// Read a response body as text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
