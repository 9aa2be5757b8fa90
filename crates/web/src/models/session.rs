//! Session-related types.

/// Session keys.
pub mod keys {
    /// Key for the serialized [`crate::context::AppContext`].
    pub const APP_CONTEXT: &str = "app_context";
}
