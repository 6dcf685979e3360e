//! Quill & Co. storefront library.
//!
//! This crate provides the storefront as a library, allowing the router to
//! be tested in-process and reused by the binary.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX fragments for cart interactions
//! - Askama templates as the only rendering path for cart state
//! - One [`quill_core::CartStore`] per visitor session, held in [`state::AppState`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, body::Body, http::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary, outside this stack.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());
    let assets = ServeDir::new(&state.config().assets_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/assets", assets)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = tracing::field::Empty
                        )
                    }),
                )
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(axum::middleware::from_fn(
                    middleware::security_headers_middleware,
                ))
                .layer(session_layer),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
