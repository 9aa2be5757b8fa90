//! Dark mode toggle.

use axum::{Form, response::IntoResponse, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::CurrentContext;

use super::table::{ROLE_SELECTION_PATH, resolve};

/// Theme toggle form.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    /// Page to return to after toggling.
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Only paths in the route table are followed; anything else goes home.
fn return_path(requested: Option<&str>) -> &str {
    requested
        .filter(|path| !path.contains('\\'))
        .filter(|path| {
            let route = path.split_once('?').map_or(*path, |(route, _)| route);
            resolve(route).is_some()
        })
        .unwrap_or(ROLE_SELECTION_PATH)
}

/// Flip dark mode, persist the theme cookie, and go back.
#[instrument(skip(current))]
pub async fn toggle(
    mut current: CurrentContext,
    Form(form): Form<ThemeForm>,
) -> Result<impl IntoResponse> {
    current.context.toggle_dark_mode(&mut current.prefs);
    current.save().await?;
    let back = Redirect::to(return_path(form.return_to.as_deref()));
    Ok((current.prefs, back))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_path() {
        assert_eq!(return_path(Some("/farm/tasks")), "/farm/tasks");
        assert_eq!(return_path(Some("//evil.example")), "/");
        assert_eq!(return_path(Some("https://evil.example")), "/");
        assert_eq!(return_path(Some("/\\evil.example")), "/");
        assert_eq!(return_path(Some("/product/\\evil.example")), "/");
        assert_eq!(return_path(Some("/farm/greenhouses")), "/");
        assert_eq!(
            return_path(Some("/marketplace/browse?query=rice")),
            "/marketplace/browse?query=rice"
        );
        assert_eq!(return_path(Some("/product/3")), "/product/3");
        assert_eq!(return_path(None), "/");
    }
}
