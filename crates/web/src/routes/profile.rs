//! Profile route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use tracing::instrument;

use crate::middleware::CurrentContext;
use crate::models::User;
use crate::views::{ProfileDraft, ProfileForm};

use super::shell::{Flash, Shell};
use super::table::PROFILE_PATH;

/// Profile display data for templates.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub name: String,
    pub initial: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub role: &'static str,
    pub verified: bool,
    pub join_date: String,
    pub avatar: String,
}

impl From<&User> for ProfileView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            initial: user.initial(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            location: user.location.clone(),
            role: user.role.label(),
            verified: user.verified,
            join_date: user.join_date.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub shell: Shell,
    pub profile: ProfileView,
}

/// Display the account details form.
#[instrument(skip(current))]
pub async fn show(current: CurrentContext) -> ProfileTemplate {
    ProfileTemplate {
        shell: Shell::new(&current.context, PROFILE_PATH),
        profile: ProfileView::from(&current.context.user),
    }
}

/// Render the edited draft once. The account is not written.
#[instrument(skip(current, form))]
pub async fn save(current: CurrentContext, Form(form): Form<ProfileForm>) -> ProfileTemplate {
    let draft = ProfileDraft::new(current.context.user.clone()).apply(&form);
    tracing::info!(name = %draft.user().name, "Profile draft saved");
    ProfileTemplate {
        shell: Shell::new(&current.context, PROFILE_PATH)
            .with_flash(Flash::success("Profile updated successfully!")),
        profile: ProfileView::from(draft.user()),
    }
}
