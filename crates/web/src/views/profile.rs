//! Editable copy of the account details.

use serde::Deserialize;

use crate::models::User;

/// Submitted profile fields. Blank fields keep the current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    user: User,
}

impl ProfileDraft {
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Apply a submitted form. Returns the edited draft; the account itself is
    /// never written.
    #[must_use]
    pub fn apply(mut self, form: &ProfileForm) -> Self {
        fn take(field: &mut String, submitted: &str) {
            let submitted = submitted.trim();
            if !submitted.is_empty() {
                submitted.clone_into(field);
            }
        }

        take(&mut self.user.name, &form.name);
        take(&mut self.user.email, &form.email);
        take(&mut self.user.phone, &form.phone);
        take(&mut self.user.location, &form.location);
        self
    }
}
