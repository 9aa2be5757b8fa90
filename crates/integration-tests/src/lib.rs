//! Integration tests for Philagri.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p philagri-integration-tests
//! ```
//!
//! Tests drive the full router in-process with [`TestApp`]. No server or
//! network is needed: requests go through `tower::ServiceExt::oneshot`, and
//! cookies are carried between requests like a browser would.
//!
//! # Test Categories
//!
//! - `shell` - Role selection, navigation and theme persistence
//! - `commands` - Transient commands and their flash messages
//! - `pages` - Page rendering, filters and not-found handling

use std::collections::BTreeMap;

use axum::{
    Router,
    body::Body,
    http::{
        HeaderMap, Request, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use philagri_web::{config::WebConfig, state::AppState, store::EntityStore};
use tower::ServiceExt;

/// Largest response body the tests read.
const BODY_LIMIT: usize = 1024 * 1024;

/// In-process application with a cookie jar.
pub struct TestApp {
    router: Router,
    cookies: BTreeMap<String, String>,
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Value of a cookie set by this response.
    #[must_use]
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find_map(|pair| {
                pair.split_once('=')
                    .filter(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_owned())
            })
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Fresh application over the seed store with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration does not load.
    #[must_use]
    pub fn new() -> Self {
        let config = WebConfig::from_lookup(|_| None)
            .unwrap_or_else(|err| panic!("default configuration must load: {err}"));
        Self {
            router: philagri_web::app(AppState::new(config, EntityStore::seed())),
            cookies: BTreeMap::new(),
        }
    }

    /// Send a cookie with every later request, as if a browser had stored it.
    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_owned(), value.to_owned());
    }

    /// GET `path`.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Request::get(path), Body::empty()).await
    }

    /// POST an urlencoded form to `path`.
    pub async fn post_form(&mut self, path: &str, form: &str) -> TestResponse {
        let builder = Request::post(path).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(builder, Body::from(form.to_owned())).await
    }

    async fn send(&mut self, mut builder: axum::http::request::Builder, body: Body) -> TestResponse {
        if !self.cookies.is_empty() {
            let header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(COOKIE, header);
        }
        let request = builder
            .body(body)
            .unwrap_or_else(|err| panic!("request must build: {err}"));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|err| match err {});

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .unwrap_or_else(|err| panic!("body must be readable: {err}"));

        let response = TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        };
        self.store_cookies(&response);
        response
    }

    fn store_cookies(&mut self, response: &TestResponse) {
        let pairs = response
            .headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
            .collect::<Vec<_>>();
        self.cookies.extend(pairs);
    }
}
