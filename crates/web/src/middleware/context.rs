//! Application context extractor.
//!
//! Restores the [`AppContext`] from the session and the theme from the
//! `philagri-theme` cookie, and hands both to the handler. Handlers that
//! change the context call [`CurrentContext::save`] and return the
//! [`CookiePreferences`] as a response part so a toggled theme reaches the
//! browser.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponseParts, ResponseParts},
};
use tower_sessions::{
    Session,
    cookie::{Cookie, SameSite},
};

use crate::context::{AppContext, ThemePreferences};
use crate::error::AppError;
use crate::models::session_keys;
use crate::state::AppState;

/// Browser cookies acting as the preference store.
///
/// Reads come from the request's `Cookie` header; writes are queued as
/// long-lived `Set-Cookie` headers for the response.
#[derive(Debug, Clone, Default)]
pub struct CookiePreferences {
    values: HashMap<String, String>,
    pending: Vec<Cookie<'static>>,
    secure: bool,
}

impl CookiePreferences {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, secure: bool) -> Self {
        let values = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(Cookie::split_parse)
            .filter_map(Result::ok)
            .map(|cookie| (cookie.name().to_owned(), cookie.value().to_owned()))
            .collect();
        Self {
            values,
            pending: Vec::new(),
            secure,
        }
    }
}

impl ThemePreferences for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
        self.pending.retain(|cookie| cookie.name() != key);
        self.pending.push(
            Cookie::build((key.to_owned(), value.to_owned()))
                .path("/")
                .permanent()
                .same_site(SameSite::Lax)
                .secure(self.secure)
                .build(),
        );
    }
}

impl IntoResponseParts for CookiePreferences {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        for cookie in self.pending {
            match HeaderValue::from_str(&cookie.to_string()) {
                Ok(value) => {
                    res.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::warn!(cookie = cookie.name(), error = %e, "Dropping cookie"),
            }
        }
        Ok(res)
    }
}

/// Extractor for the session's application context.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(current: CurrentContext) -> impl IntoResponse {
///     format!("role: {}", current.context.role)
/// }
/// ```
pub struct CurrentContext {
    pub context: AppContext,
    pub prefs: CookiePreferences,
    session: Session,
}

impl CurrentContext {
    /// Write the context back to the session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` if the session store rejects the write.
    pub async fn save(&self) -> Result<(), AppError> {
        self.session
            .insert(session_keys::APP_CONTEXT, &self.context)
            .await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for CurrentContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer is not installed".to_string()))?;

        let prefs = CookiePreferences::from_headers(&parts.headers, state.config().is_secure());
        let saved: Option<AppContext> = session.get(session_keys::APP_CONTEXT).await?;
        let context = AppContext::restore(saved, state.store().user(), &prefs);

        Ok(Self {
            context,
            prefs,
            session,
        })
    }
}
