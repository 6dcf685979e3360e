//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request spans)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, client hints, etc.)
//! 5. Session layer (in-memory, holds the cart id and theme preference)

pub mod htmx;
pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod theme;

pub use htmx::HxRequest;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{create_session_layer, session_keys};
pub use theme::{CurrentTheme, store_theme};
