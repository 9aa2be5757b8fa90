//! Marketplace route handlers: dashboard, browse, listings and orders.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
};
use philagri_core::{OrderStatus, Peso};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::CurrentContext;
use crate::models::{Order, Product};
use crate::queries::catalog::{
    BrowseFilter, BrowseSort, CATEGORIES, CategoryFilter, RECOMMENDED_MIN_RATING,
    browse as browse_products, recommended, sort_products,
};
use crate::state::AppState;
use crate::views::{ListingsBoard, MarketplaceOverview, OrderBoard};

use super::cards::{StatCard, TrendRow, whole_pesos};
use super::settle;
use super::shell::{Flash, Shell};
use super::table::{BROWSE_PATH, MARKETPLACE_DASHBOARD_PATH, ORDERS_PATH};

const MY_LISTINGS_PATH: &str = "/marketplace/my-listings";
const RECOMMENDED_COUNT: usize = 4;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub unit: String,
    pub quantity: u32,
    pub description: String,
    pub image: String,
    pub seller_name: String,
    pub location: String,
    pub rating: String,
    pub review_count: u32,
    pub available: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.display(),
            unit: product.unit.clone(),
            quantity: product.quantity,
            description: product.description.clone(),
            image: product.image.clone(),
            seller_name: product.seller_name.clone(),
            location: product.location.clone(),
            rating: product.rating.to_string(),
            review_count: product.review_count,
            available: product.available,
        }
    }
}

/// A status button on a sale.
#[derive(Debug, Clone)]
pub struct OrderAction {
    pub to: &'static str,
    pub label: &'static str,
}

const fn action_label(to: OrderStatus) -> &'static str {
    match to {
        OrderStatus::Confirmed => "Confirm Order",
        OrderStatus::Shipped => "Mark as Shipped",
        OrderStatus::Delivered => "Mark as Delivered",
        OrderStatus::Cancelled => "Cancel",
        OrderStatus::Pending => "Reopen",
    }
}

/// Order display data for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub buyer_name: String,
    pub seller_name: String,
    pub quantity: u32,
    pub total_price: String,
    pub status: &'static str,
    pub order_date: String,
    pub delivery_date: Option<String>,
    pub tracking_number: Option<String>,
    /// Fulfilment progress in percent.
    pub progress: u8,
    pub actions: Vec<OrderAction>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            product_id: order.product_id.to_string(),
            product_name: order.product_name.clone(),
            buyer_name: order.buyer_name.clone(),
            seller_name: order.seller_name.clone(),
            quantity: order.quantity,
            total_price: order.total_price.display(),
            status: order.status.as_str(),
            order_date: order.order_date.clone(),
            delivery_date: order.delivery_date.clone(),
            tracking_number: order.tracking_number.clone(),
            progress: order.status.progress(),
            actions: Vec::new(),
        }
    }
}

impl OrderView {
    /// A sale, with the buttons its status allows.
    fn sale(order: &Order) -> Self {
        let actions = order
            .status
            .next_steps()
            .iter()
            .map(|to| OrderAction {
                to: to.as_str(),
                label: action_label(*to),
            })
            .collect();
        Self {
            actions,
            ..Self::from(order)
        }
    }
}

fn product_views<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductView> {
    products.into_iter().map(ProductView::from).collect()
}

/// Marketplace dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "marketplace/dashboard.html")]
pub struct MarketplaceDashboardTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub recent_purchases: Vec<OrderView>,
    pub recent_sales: Vec<OrderView>,
    pub featured: Vec<ProductView>,
    pub sales_trend: Vec<TrendRow>,
}

/// A select box option.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Browse page template.
#[derive(Template, WebTemplate)]
#[template(path = "marketplace/browse.html")]
pub struct BrowseTemplate {
    pub shell: Shell,
    pub query: String,
    pub min_price: String,
    pub max_price: String,
    pub categories: Vec<SelectOption>,
    pub sorts: Vec<SelectOption>,
    pub recommended: Vec<ProductView>,
    pub products: Vec<ProductView>,
}

/// My listings template.
#[derive(Template, WebTemplate)]
#[template(path = "marketplace/my_listings.html")]
pub struct MyListingsTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub listings: Vec<ProductView>,
}

/// A status tab on the orders page.
#[derive(Debug, Clone)]
pub struct StatusTab {
    pub value: &'static str,
    pub active: bool,
}

/// Orders template with the purchases and sales tabs.
#[derive(Template, WebTemplate)]
#[template(path = "marketplace/orders.html")]
pub struct OrdersTemplate {
    pub shell: Shell,
    pub stats: Vec<StatCard>,
    pub showing_sales: bool,
    pub status: &'static str,
    pub status_tabs: Vec<StatusTab>,
    pub orders: Vec<OrderView>,
}

/// Cleared number inputs arrive as `min=`; treat them as absent.
fn empty_string_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Browse query string.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: String,
    /// Lower price bound in pesos.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min: Option<Decimal>,
    /// Upper price bound in pesos.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max: Option<Decimal>,
    pub sort: Option<String>,
}

impl BrowseQuery {
    fn filter(&self) -> Result<BrowseFilter> {
        let defaults = BrowseFilter::default();
        let bound = |value: Option<Decimal>, default: Peso| {
            value.map_or(Ok(default), |amount| {
                Peso::new(amount).map_err(|e| AppError::BadRequest(e.to_string()))
            })
        };
        Ok(BrowseFilter {
            query: self.query.trim().to_owned(),
            category: CategoryFilter::parse(&self.category),
            min_price: bound(self.min, defaults.min_price)?,
            max_price: bound(self.max, defaults.max_price)?,
        })
    }

    fn sort(&self) -> Result<BrowseSort> {
        match self.sort.as_deref() {
            None | Some("") => Ok(BrowseSort::default()),
            Some(value) => value.parse().map_err(AppError::BadRequest),
        }
    }
}

/// Orders query string.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// `purchases` (default) or `sales`.
    pub tab: Option<String>,
    /// An order status, or `all`.
    pub status: Option<String>,
}

impl OrdersQuery {
    fn showing_sales(&self) -> bool {
        self.tab.as_deref() == Some("sales")
    }

    fn status(&self) -> Result<Option<OrderStatus>> {
        match self.status.as_deref() {
            None | Some("" | "all") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(AppError::BadRequest),
        }
    }
}

/// Order status update form.
#[derive(Debug, Deserialize)]
pub struct OrderStatusForm {
    pub status: String,
}

/// New listing form. Acknowledged, never stored.
#[derive(Debug, Deserialize)]
pub struct ListingForm {
    #[serde(default)]
    pub name: String,
}

/// Display the marketplace dashboard.
#[instrument(skip(current, state))]
pub async fn dashboard(
    current: CurrentContext,
    State(state): State<AppState>,
) -> MarketplaceDashboardTemplate {
    let overview = MarketplaceOverview::from_store(state.store());
    let stats = vec![
        StatCard::new(
            "Active Listings",
            overview.active_listings,
            format!("{} total listings", overview.listings.len()),
        ),
        StatCard::new(
            "Purchases",
            overview.purchases.len(),
            format!("{} spent", whole_pesos(overview.total_spent)),
        ),
        StatCard::new(
            "Sales",
            overview.sales.len(),
            format!("{} earned", whole_pesos(overview.total_earned)),
        ),
        StatCard::new("Unread Messages", current.context.unread_count, ""),
    ];

    MarketplaceDashboardTemplate {
        shell: Shell::new(&current.context, MARKETPLACE_DASHBOARD_PATH),
        stats,
        recent_purchases: overview
            .recent_purchases()
            .iter()
            .map(|o| OrderView::from(*o))
            .collect(),
        recent_sales: overview
            .recent_sales()
            .iter()
            .map(|o| OrderView::from(*o))
            .collect(),
        featured: product_views(overview.featured.iter().copied()),
        sales_trend: overview.sales_trend.iter().map(TrendRow::from).collect(),
    }
}

/// Search, filter and sort available products.
#[instrument(skip(current, state))]
pub async fn browse(
    current: CurrentContext,
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<BrowseTemplate> {
    let filter = query.filter()?;
    let sort = query.sort()?;
    tracing::debug!(?filter, sort = sort.as_str(), "Browsing products");

    let products = sort_products(browse_products(state.store().products(), &filter), sort);
    let category = filter.category.as_form_value();

    Ok(BrowseTemplate {
        shell: Shell::new(&current.context, BROWSE_PATH),
        query: filter.query.clone(),
        min_price: filter.min_price.amount().to_string(),
        max_price: filter.max_price.amount().to_string(),
        categories: CATEGORIES
            .iter()
            .map(|&value| SelectOption {
                value,
                label: value,
                selected: value == category,
            })
            .collect(),
        sorts: BrowseSort::ALL
            .iter()
            .map(|s| SelectOption {
                value: s.as_str(),
                label: s.label(),
                selected: *s == sort,
            })
            .collect(),
        recommended: product_views(recommended(
            state.store().products(),
            RECOMMENDED_MIN_RATING,
            RECOMMENDED_COUNT,
        )),
        products: product_views(products),
    })
}

fn listings_page(board: &ListingsBoard, shell: Shell) -> MyListingsTemplate {
    let rating = board
        .average_rating()
        .map_or_else(|| "-".to_owned(), |r| r.to_string());
    MyListingsTemplate {
        shell,
        stats: vec![
            StatCard::new("Total Listings", board.products().len(), ""),
            StatCard::new("Active", board.active_count(), ""),
            StatCard::new("Average Rating", rating, ""),
        ],
        listings: product_views(board.products()),
    }
}

/// Display the seller's own listings.
#[instrument(skip(current, state))]
pub async fn my_listings(current: CurrentContext, State(state): State<AppState>) -> MyListingsTemplate {
    listings_page(
        &ListingsBoard::from_store(state.store()),
        Shell::new(&current.context, MY_LISTINGS_PATH),
    )
}

/// Flip one listing's availability.
#[instrument(skip(current, state))]
pub async fn toggle_listing(
    current: CurrentContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<MyListingsTemplate> {
    let fresh = || ListingsBoard::from_store(state.store());
    let (board, flash) = settle(fresh().toggle_availability(&id), fresh, || {
        "Product availability updated!".to_owned()
    })?;
    Ok(listings_page(
        &board,
        Shell::new(&current.context, MY_LISTINGS_PATH).with_flash(flash),
    ))
}

/// Remove one listing from the rendered board.
#[instrument(skip(current, state))]
pub async fn delete_listing(
    current: CurrentContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<MyListingsTemplate> {
    let fresh = || ListingsBoard::from_store(state.store());
    let (board, flash) = settle(fresh().remove(&id), fresh, || {
        "Product deleted successfully!".to_owned()
    })?;
    Ok(listings_page(
        &board,
        Shell::new(&current.context, MY_LISTINGS_PATH).with_flash(flash),
    ))
}

/// Acknowledge a new listing without storing it.
#[instrument(skip(current, state))]
pub async fn add_listing(
    current: CurrentContext,
    State(state): State<AppState>,
    Form(form): Form<ListingForm>,
) -> MyListingsTemplate {
    tracing::info!(name = %form.name, "Listing form acknowledged");
    listings_page(
        &ListingsBoard::from_store(state.store()),
        Shell::new(&current.context, MY_LISTINGS_PATH)
            .with_flash(Flash::success("Product added successfully!")),
    )
}

fn orders_page(
    board: &OrderBoard,
    showing_sales: bool,
    status: Option<OrderStatus>,
    shell: Shell,
) -> OrdersTemplate {
    let orders = if showing_sales {
        board.sales_with(status).into_iter().map(OrderView::sale).collect()
    } else {
        board
            .purchases_with(status)
            .into_iter()
            .map(OrderView::from)
            .collect()
    };
    let selected = status.map_or("all", |s| s.as_str());
    let status_tabs = std::iter::once("all")
        .chain(OrderStatus::ALL.iter().map(OrderStatus::as_str))
        .map(|value| StatusTab {
            value,
            active: value == selected,
        })
        .collect();

    OrdersTemplate {
        shell,
        stats: vec![
            StatCard::new("Total Purchases", board.purchases().len(), ""),
            StatCard::new("Active Orders", board.active_purchases().len(), ""),
            StatCard::new("Total Spent", board.total_spent().display(), ""),
            StatCard::new("Total Earned", board.total_earned().display(), ""),
        ],
        showing_sales,
        status: selected,
        status_tabs,
        orders,
    }
}

/// Display purchases or sales, optionally filtered by status.
#[instrument(skip(current, state))]
pub async fn orders(
    current: CurrentContext,
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<OrdersTemplate> {
    let status = query.status()?;
    Ok(orders_page(
        &OrderBoard::from_store(state.store()),
        query.showing_sales(),
        status,
        Shell::new(&current.context, ORDERS_PATH),
    ))
}

/// Move one of the seller's orders along its lifecycle.
#[instrument(skip(current, state))]
pub async fn update_order_status(
    current: CurrentContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<OrderStatusForm>,
) -> Result<OrdersTemplate> {
    let to: OrderStatus = form.status.parse().map_err(AppError::BadRequest)?;
    let fresh = || OrderBoard::from_store(state.store());
    let (board, flash) = settle(fresh().update_sale_status(&id, to), fresh, || {
        format!("Order {id} updated to {to}")
    })?;
    Ok(orders_page(
        &board,
        true,
        None,
        Shell::new(&current.context, ORDERS_PATH).with_flash(flash),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;
    use crate::queries::catalog::DEFAULT_MAX_PRICE;
    use crate::store::EntityStore;

    fn parse(uri: &'static str) -> Option<BrowseQuery> {
        Query::<BrowseQuery>::try_from_uri(&Uri::from_static(uri))
            .ok()
            .map(|Query(query)| query)
    }

    #[test]
    fn test_browse_query_defaults() {
        let query = BrowseQuery::default();
        assert_eq!(query.filter().ok(), Some(BrowseFilter::default()));
        assert!(matches!(query.sort(), Ok(BrowseSort::Rating)));
        assert_eq!(
            query.filter().ok().map(|f| f.max_price),
            Some(Peso::whole(DEFAULT_MAX_PRICE))
        );
    }

    #[test]
    fn test_cleared_price_fields_use_defaults() {
        let query = parse("/marketplace/browse?query=&min=&max=300");
        let filter = query.and_then(|q| q.filter().ok());
        assert_eq!(filter, Some(BrowseFilter::default()));
    }

    #[test]
    fn test_decimal_price_bound() {
        let query = parse("/marketplace/browse?max=45.5");
        let filter = query.and_then(|q| q.filter().ok());
        assert_eq!(
            filter.map(|f| f.max_price.amount()),
            Some(Decimal::new(455, 1))
        );
    }

    #[test]
    fn test_bad_price_bounds_are_rejected() {
        assert!(parse("/marketplace/browse?min=cheap").is_none());

        let negative = parse("/marketplace/browse?min=-5");
        assert!(matches!(
            negative.map(|q| q.filter()),
            Some(Err(AppError::BadRequest(_)))
        ));
    }

    #[test]
    fn test_browse_query_rejects_unknown_sort() {
        let query = BrowseQuery {
            sort: Some("cheapest".to_owned()),
            ..BrowseQuery::default()
        };
        assert!(matches!(query.sort(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_orders_query_status() {
        let all = OrdersQuery {
            tab: None,
            status: Some("all".to_owned()),
        };
        assert!(matches!(all.status(), Ok(None)));
        assert!(!all.showing_sales());

        let shipped = OrdersQuery {
            tab: Some("sales".to_owned()),
            status: Some("shipped".to_owned()),
        };
        assert!(matches!(shipped.status(), Ok(Some(OrderStatus::Shipped))));
        assert!(shipped.showing_sales());
    }

    #[test]
    fn test_sale_actions_follow_lifecycle() {
        let store = EntityStore::seed();
        let shipped = store.orders().iter().find(|o| o.id == "o1");
        let labels: Vec<&str> = shipped
            .map(|o| OrderView::sale(o).actions.iter().map(|a| a.label).collect())
            .unwrap_or_default();
        assert_eq!(labels, vec!["Mark as Delivered"]);
    }
}
