//! Philagri web library.
//!
//! This crate provides the farm management and marketplace dashboards as a
//! library, allowing the router to be tested and the route table and seed
//! store to be reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod context;
pub mod error;
pub mod middleware;
pub mod models;
pub mod queries;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router over `state`.
///
/// Sentry layers are outermost so every request is covered.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
