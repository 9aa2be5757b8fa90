//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with the in-memory store)
//!
//! The application context is not a layer: handlers pull it from the session
//! through the [`CurrentContext`] extractor.

pub mod context;
pub mod session;

pub use context::{CookiePreferences, CurrentContext};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
