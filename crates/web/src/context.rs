//! Session-scoped application context.
//!
//! The context is a small record carried in the browser session and handed to
//! every handler through [`crate::middleware::CurrentContext`]. It changes only
//! through [`AppContext::select_role`] and [`AppContext::toggle_dark_mode`].
//!
//! The theme flag is the one piece of state that outlives the session: it is
//! written to a [`ThemePreferences`] store under [`THEME_KEY`] on every toggle and
//! read back whenever a context is restored.

use std::collections::HashMap;

use philagri_core::{Role, Theme};
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Preference key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "philagri-theme";

/// Unread message badge shown in a fresh session.
pub const INITIAL_UNREAD_COUNT: usize = 3;

/// Notification badge shown in a fresh session.
pub const INITIAL_NOTIFICATION_COUNT: usize = 5;

/// Client-side key/value preferences that survive the session.
pub trait ThemePreferences {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory preferences, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut prefs = Self::new();
        prefs.set(key, value);
        prefs
    }
}

impl ThemePreferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// The shared session state visible to every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppContext {
    pub user: User,
    pub role: Role,
    pub unread_count: usize,
    pub notification_count: usize,
    pub dark_mode: bool,
}

impl AppContext {
    /// A fresh session for `user`: farm owner role, seeded badge counts, and
    /// the persisted theme.
    #[must_use]
    pub fn from_preferences(user: User, prefs: &impl ThemePreferences) -> Self {
        let role = Role::default();
        Self {
            user: User { role, ..user },
            role,
            unread_count: INITIAL_UNREAD_COUNT,
            notification_count: INITIAL_NOTIFICATION_COUNT,
            dark_mode: Self::persisted_theme(prefs).is_dark(),
        }
    }

    /// Resume a saved session record, or start a fresh one. The theme always
    /// comes from the preference store.
    #[must_use]
    pub fn restore(saved: Option<Self>, user: &User, prefs: &impl ThemePreferences) -> Self {
        match saved {
            Some(mut context) => {
                context.dark_mode = Self::persisted_theme(prefs).is_dark();
                context
            }
            None => Self::from_preferences(user.clone(), prefs),
        }
    }

    fn persisted_theme(prefs: &impl ThemePreferences) -> Theme {
        Theme::from_stored(prefs.get(THEME_KEY).as_deref())
    }

    /// Switch dashboards. Selecting the current role changes nothing.
    pub fn select_role(&mut self, role: Role) {
        if self.role != role {
            tracing::info!(from = %self.role, to = %role, "Role selected");
        }
        self.role = role;
        self.user.role = role;
    }

    /// Flip dark mode and persist the new theme.
    pub fn toggle_dark_mode(&mut self, prefs: &mut impl ThemePreferences) -> Theme {
        self.dark_mode = !self.dark_mode;
        let theme = self.theme();
        prefs.set(THEME_KEY, theme.as_str());
        tracing::debug!(theme = %theme, "Theme toggled");
        theme
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    fn fresh(prefs: &MemoryPreferences) -> AppContext {
        AppContext::from_preferences(EntityStore::seed().user().clone(), prefs)
    }

    #[test]
    fn test_fresh_context_defaults() {
        let context = fresh(&MemoryPreferences::new());
        assert_eq!(context.role, Role::FarmOwner);
        assert_eq!(context.unread_count, 3);
        assert_eq!(context.notification_count, 5);
        assert!(!context.dark_mode);
    }

    #[test]
    fn test_fresh_context_reads_persisted_theme() {
        let context = fresh(&MemoryPreferences::with(THEME_KEY, "dark"));
        assert!(context.dark_mode);

        let context = fresh(&MemoryPreferences::with(THEME_KEY, "DARK"));
        assert!(!context.dark_mode);
    }

    #[test]
    fn test_select_role_is_idempotent() {
        let mut context = fresh(&MemoryPreferences::new());
        context.select_role(Role::Marketplace);
        let once = context.clone();
        context.select_role(Role::Marketplace);
        assert_eq!(context, once);
        assert_eq!(context.role, Role::Marketplace);
    }

    #[test]
    fn test_toggle_from_light_persists_dark() {
        let mut prefs = MemoryPreferences::with(THEME_KEY, "light");
        let mut context = fresh(&prefs);

        assert_eq!(context.toggle_dark_mode(&mut prefs), Theme::Dark);
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
        assert!(context.dark_mode);
    }

    #[test]
    fn test_double_toggle_restores_persisted_value() {
        let mut prefs = MemoryPreferences::with(THEME_KEY, "light");
        let mut context = fresh(&prefs);

        context.toggle_dark_mode(&mut prefs);
        context.toggle_dark_mode(&mut prefs);

        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
        assert!(!context.dark_mode);
    }

    #[test]
    fn test_toggle_writes_even_when_nothing_was_stored() {
        let mut prefs = MemoryPreferences::new();
        let mut context = fresh(&prefs);
        context.toggle_dark_mode(&mut prefs);
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_restore_keeps_role_but_rereads_theme() {
        let store = EntityStore::seed();
        let mut saved = fresh(&MemoryPreferences::new());
        saved.select_role(Role::Marketplace);

        let prefs = MemoryPreferences::with(THEME_KEY, "dark");
        let context = AppContext::restore(Some(saved), store.user(), &prefs);
        assert_eq!(context.role, Role::Marketplace);
        assert!(context.dark_mode);

        let started = AppContext::restore(None, store.user(), &MemoryPreferences::new());
        assert_eq!(started.role, Role::FarmOwner);
    }

    #[test]
    fn test_user_carries_session_role() {
        let mut context = fresh(&MemoryPreferences::new());
        assert_eq!(context.user.role, Role::FarmOwner);
        context.select_role(Role::Marketplace);
        assert_eq!(context.user.role, Role::Marketplace);
        assert_eq!(context.user.name, "Demo User");
    }

    #[test]
    fn test_session_record_uses_wire_names() {
        let mut context = fresh(&MemoryPreferences::new());
        context.select_role(Role::Marketplace);

        let record = serde_json::to_value(&context).unwrap_or_default();
        assert_eq!(record["role"], "marketplace");
        assert_eq!(record["unread_count"], 3);
    }
}
