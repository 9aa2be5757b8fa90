//! Session middleware configuration.
//!
//! Sets up memory-backed sessions using tower-sessions. Sessions hold only
//! the application context, so losing them on restart resets the role.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::WebConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "philagri_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// `MemoryStore` ignores expired records on load but never deletes them, so
/// memory grows with the number of distinct clients until restart. Each
/// record is one small `AppContext`.
#[must_use]
pub fn create_session_layer(config: &WebConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
