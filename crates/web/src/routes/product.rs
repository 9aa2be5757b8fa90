//! Product detail and order placement.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::middleware::CurrentContext;
use crate::models::{Product, Review};
use crate::state::AppState;
use crate::views::OrderDraft;

use super::marketplace::ProductView;
use super::shell::{Flash, Shell};
use super::table::{BROWSE_PATH, MESSAGES_PATH, ORDERS_PATH};

/// Seconds the confirmation stays up before moving to the orders page.
const PLACED_REDIRECT_SECONDS: u32 = 2;

/// Review display data for templates.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub buyer_name: String,
    pub stars: String,
    pub comment: String,
    pub date: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        let filled = usize::from(review.rating.min(5));
        Self {
            buyer_name: review.buyer_name.clone(),
            stars: format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled)),
            comment: review.comment.clone(),
            date: review.date.clone(),
        }
    }
}

/// Order quantity display data for templates.
#[derive(Debug, Clone)]
pub struct DraftView {
    pub quantity: u32,
    pub max_quantity: u32,
    pub total: String,
}

impl From<&OrderDraft> for DraftView {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            quantity: draft.quantity,
            max_quantity: draft.max_quantity,
            total: draft.total().display(),
        }
    }
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "product/show.html")]
pub struct ProductShowTemplate {
    pub shell: Shell,
    pub product: ProductView,
    pub draft: DraftView,
    pub reviews: Vec<ReviewView>,
    pub messages_path: &'static str,
}

/// Empty state for an unknown product id.
#[derive(Template, WebTemplate)]
#[template(path = "product/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub shell: Shell,
    pub id: String,
    pub browse_path: &'static str,
}

/// Order confirmation, refreshing to the orders page.
#[derive(Template, WebTemplate)]
#[template(path = "product/placed.html")]
pub struct OrderPlacedTemplate {
    pub shell: Shell,
    pub product: ProductView,
    pub draft: DraftView,
    pub redirect_seconds: u32,
    pub orders_path: &'static str,
}

/// Requested quantity on the detail page.
#[derive(Debug, Default, Deserialize)]
pub struct QuantityQuery {
    pub quantity: Option<u32>,
}

/// Order form.
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub quantity: u32,
}

fn not_found(shell: Shell, id: String) -> Response {
    tracing::warn!(product_id = %id, "Unknown product");
    (
        StatusCode::NOT_FOUND,
        ProductNotFoundTemplate {
            shell,
            id,
            browse_path: BROWSE_PATH,
        },
    )
        .into_response()
}

fn show_page(state: &AppState, product: &Product, draft: &OrderDraft, shell: Shell) -> ProductShowTemplate {
    ProductShowTemplate {
        shell,
        product: ProductView::from(product),
        draft: DraftView::from(draft),
        reviews: state
            .store()
            .reviews_for(&product.id)
            .into_iter()
            .map(ReviewView::from)
            .collect(),
        messages_path: MESSAGES_PATH,
    }
}

/// Display one product with its reviews and an order form.
#[instrument(skip(current, state))]
pub async fn show(
    current: CurrentContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<QuantityQuery>,
) -> Response {
    let path = format!("/product/{id}");
    let shell = Shell::new(&current.context, &path);
    let Some(product) = state.store().product(&id) else {
        return not_found(shell, id);
    };

    let draft = OrderDraft::with_quantity(product, query.quantity.unwrap_or(1));
    show_page(&state, product, &draft, shell).into_response()
}

/// Place an order and show the confirmation once.
#[instrument(skip(current, state))]
pub async fn place_order(
    current: CurrentContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<OrderForm>,
) -> Response {
    let path = format!("/product/{id}");
    let shell = Shell::new(&current.context, &path);
    let Some(product) = state.store().product(&id) else {
        return not_found(shell, id);
    };

    let draft = OrderDraft::with_quantity(product, form.quantity);
    if !product.available {
        tracing::warn!(product_id = %id, "Order for unavailable product");
        let flash = Flash::error(format!("{} is currently unavailable", product.name));
        return (
            StatusCode::CONFLICT,
            show_page(&state, product, &draft, shell.with_flash(flash)),
        )
            .into_response();
    }

    tracing::info!(
        product_id = %id,
        quantity = draft.quantity,
        total = %draft.total(),
        "Order placed"
    );
    OrderPlacedTemplate {
        shell: shell.with_flash(Flash::success(draft.confirmation())),
        product: ProductView::from(product),
        draft: DraftView::from(&draft),
        redirect_seconds: PLACED_REDIRECT_SECONDS,
        orders_path: ORDERS_PATH,
    }
    .into_response()
}
