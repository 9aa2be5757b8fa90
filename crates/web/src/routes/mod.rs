//! HTTP route handlers for the farm and marketplace dashboards.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                   - Role chooser (no shell)
//! POST /role                               - Select role, redirect to its dashboard
//! POST /theme                              - Toggle dark mode, redirect back
//! GET  /health                             - Health check
//!
//! # Farm
//! GET  /farm/dashboard                     - Farm overview
//! GET  /farm/workers                       - Workers
//! POST /farm/workers                       - Add worker (acknowledged only)
//! GET  /farm/crops                         - Crops
//! GET  /farm/machines                      - Machines
//! GET  /farm/fertilizers                   - Fertilizer inventory
//! GET  /farm/tasks                         - Task board
//! POST /farm/tasks/{id}/status             - Move a task along its lifecycle
//!
//! # Marketplace
//! GET  /marketplace/dashboard              - Marketplace overview
//! GET  /marketplace/browse                 - Search and filter products
//! GET  /marketplace/my-listings            - Seller listings
//! POST /marketplace/my-listings            - Add listing (acknowledged only)
//! POST /marketplace/my-listings/{id}/toggle - Flip availability
//! POST /marketplace/my-listings/{id}/delete - Remove listing
//! GET  /marketplace/orders                 - Purchases and sales
//! POST /marketplace/orders/{id}/status     - Move a sale along its lifecycle
//!
//! # Shared
//! GET  /messages                           - Inbox
//! POST /messages                           - Send a message
//! GET  /profile                            - Account details
//! POST /profile                            - Save profile draft
//! GET  /product/{id}                       - Product detail
//! POST /product/{id}/order                 - Place an order
//! ```
//!
//! Commands render their page once with a flash; nothing is written back to
//! the store.

pub mod cards;
pub mod farm;
pub mod marketplace;
pub mod messages;
pub mod product;
pub mod profile;
pub mod role;
pub mod shell;
pub mod table;
pub mod theme;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, get, post},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::views::ViewError;

use self::shell::Flash;
use self::table::{Page, ROUTES, ROLE_SELECTION_PATH};

/// Resolve a command outcome into the board to render and its flash.
///
/// An unknown id keeps the page usable: `fallback` is rendered unchanged with
/// an error flash. Any other failure becomes an [`AppError`].
pub(crate) fn settle<B>(
    outcome: Result<B, ViewError>,
    fallback: impl FnOnce() -> B,
    success: impl FnOnce() -> String,
) -> Result<(B, Flash), AppError> {
    match outcome {
        Ok(board) => Ok((board, Flash::success(success()))),
        Err(err @ ViewError::UnknownId { .. }) => {
            tracing::warn!(error = %err, "Command against unknown id");
            Ok((fallback(), Flash::error(err.to_string())))
        }
        Err(err) => Err(err.into()),
    }
}

/// Handlers mounted at a route table path.
fn page_handler(page: Page) -> MethodRouter<AppState> {
    match page {
        Page::RoleSelection => get(role::chooser),
        Page::FarmDashboard => get(farm::dashboard),
        Page::Workers => get(farm::workers).post(farm::add_worker),
        Page::Crops => get(farm::crops),
        Page::Machines => get(farm::machines),
        Page::Fertilizers => get(farm::fertilizers),
        Page::Tasks => get(farm::tasks),
        Page::MarketplaceDashboard => get(marketplace::dashboard),
        Page::Browse => get(marketplace::browse),
        Page::MyListings => get(marketplace::my_listings).post(marketplace::add_listing),
        Page::Orders => get(marketplace::orders),
        Page::Messages => get(messages::index).post(messages::send),
        Page::Profile => get(profile::show).post(profile::save),
        Page::ProductDetail => get(product::show),
    }
}

/// Plain 404 for paths outside the route table.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub home_path: &'static str,
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            home_path: ROLE_SELECTION_PATH,
        },
    )
}

/// Create all routes for the dashboards.
pub fn routes() -> Router<AppState> {
    let pages = ROUTES.iter().fold(Router::new(), |router, entry| {
        router.route(&entry.axum_path(), page_handler(entry.page))
    });

    pages
        .route("/role", post(role::select))
        .route("/theme", post(theme::toggle))
        .route("/farm/tasks/{id}/status", post(farm::update_task_status))
        .route(
            "/marketplace/my-listings/{id}/toggle",
            post(marketplace::toggle_listing),
        )
        .route(
            "/marketplace/my-listings/{id}/delete",
            post(marketplace::delete_listing),
        )
        .route(
            "/marketplace/orders/{id}/status",
            post(marketplace::update_order_status),
        )
        .route("/product/{id}/order", post(product::place_order))
        .fallback(fallback)
}
