//! Role chooser and role selection.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use philagri_core::Role;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::CurrentContext;

use super::table::dashboard_path;

/// Role card display data for templates.
pub struct RoleOption {
    pub value: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub button: &'static str,
}

const ROLE_OPTIONS: [RoleOption; 2] = [
    RoleOption {
        value: "farmowner",
        title: "Farm Owner",
        description: "Manage your farm operations, workers, crops, and resources",
        features: &[
            "Track and manage farm workers and their tasks",
            "Monitor crop planting, growth, and harvest schedules",
            "Keep track of machinery and equipment maintenance",
            "Manage fertilizers, seeds, and farm supplies inventory",
            "Assign and track daily farm tasks and activities",
            "View farm analytics and performance reports",
        ],
        button: "Enter Farm Management",
    },
    RoleOption {
        value: "marketplace",
        title: "Marketplace",
        description: "Buy and sell agricultural products online",
        features: &[
            "Browse and buy fresh farm products from verified sellers",
            "List and sell your own farm products to customers",
            "Track orders and deliveries in real-time",
            "Message buyers and sellers directly",
        ],
        button: "Enter Marketplace",
    },
];

/// Role chooser template. Rendered without the navigation shell.
#[derive(Template, WebTemplate)]
#[template(path = "role_selection.html")]
pub struct RoleSelectionTemplate {
    pub theme: &'static str,
    pub options: &'static [RoleOption],
}

/// Role selection form.
#[derive(Debug, Deserialize)]
pub struct RoleForm {
    pub role: String,
}

/// Display the role chooser, whatever role the session holds.
#[instrument(skip(current))]
pub async fn chooser(current: CurrentContext) -> RoleSelectionTemplate {
    RoleSelectionTemplate {
        theme: current.context.theme().as_str(),
        options: &ROLE_OPTIONS,
    }
}

/// Switch the session role and land on that role's dashboard.
#[instrument(skip(current))]
pub async fn select(mut current: CurrentContext, Form(form): Form<RoleForm>) -> Result<Redirect> {
    let role: Role = form.role.parse().map_err(AppError::BadRequest)?;
    current.context.select_role(role);
    current.save().await?;
    Ok(Redirect::to(dashboard_path(role)))
}
