//! Navigation shell shared by every page except the role chooser.

use crate::context::AppContext;

use super::table::{MESSAGES_PATH, PROFILE_PATH, nav_links};

/// Navigation link display data for templates.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// One-shot notice shown after a command.
#[derive(Debug, Clone)]
pub struct Flash {
    /// `success` or `error`, used as a CSS modifier.
    pub kind: &'static str,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }
}

/// Shell display data for templates.
#[derive(Debug, Clone)]
pub struct Shell {
    pub role_label: &'static str,
    pub nav: Vec<NavItem>,
    pub messages_path: &'static str,
    pub messages_active: bool,
    pub profile_path: &'static str,
    pub unread_count: usize,
    pub notification_count: usize,
    pub theme: &'static str,
    /// Label of the theme the toggle switches to.
    pub toggle_label: &'static str,
    pub current_path: String,
    pub user_initial: String,
    pub flash: Option<Flash>,
}

impl Shell {
    #[must_use]
    pub fn new(context: &AppContext, current_path: &str) -> Self {
        let nav = nav_links(context.role)
            .iter()
            .map(|link| NavItem {
                path: link.path,
                label: link.label,
                active: link.path == current_path,
            })
            .collect();
        let theme = context.theme();

        Self {
            role_label: context.role.label(),
            nav,
            messages_path: MESSAGES_PATH,
            messages_active: current_path == MESSAGES_PATH,
            profile_path: PROFILE_PATH,
            unread_count: context.unread_count,
            notification_count: context.notification_count,
            theme: theme.as_str(),
            toggle_label: if theme.is_dark() { "Light" } else { "Dark" },
            current_path: current_path.to_owned(),
            user_initial: context.user.initial(),
            flash: None,
        }
    }

    #[must_use]
    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}
