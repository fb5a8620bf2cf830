//! HTTP middleware for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (`http_request` span)
//! 3. Request ID
//! 4. Security headers
//! 5. Session layer (tower-sessions with `PostgreSQL` store)
//!
//! Admin routes are guarded per-handler with the [`RequireAdmin`] extractor
//! rather than a router-wide layer, so public routes never touch the session
//! store.

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{RequireAdmin, clear_current_admin, current_admin, set_current_admin};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
