//! Page rendering, query filters and not-found handling.

use axum::http::StatusCode;
use philagri_integration_tests::TestApp;

const PAGES: [&str; 14] = [
    "/",
    "/farm/dashboard",
    "/farm/workers",
    "/farm/crops",
    "/farm/machines",
    "/farm/fertilizers",
    "/farm/tasks",
    "/marketplace/dashboard",
    "/marketplace/browse",
    "/marketplace/my-listings",
    "/marketplace/orders",
    "/messages",
    "/profile",
    "/product/1",
];

#[tokio::test]
async fn test_every_page_renders() {
    let mut app = TestApp::new();
    for path in PAGES {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains("<html"), "{path}");
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mut app = TestApp::new();
    let response = app.get("/farm/greenhouses").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Back to role selection"));
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let mut app = TestApp::new();
    let response = app.get("/product/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Product not found"));
    assert!(response.body.contains("href=\"/marketplace/browse\""));
}

#[tokio::test]
async fn test_product_detail() {
    let mut app = TestApp::new();
    let response = app.get("/product/1").await;
    assert!(response.body.contains("Premium Rice (Sinandomeng)"));
    assert!(response.body.contains("Gonzales Farm"));
    assert!(response.body.contains("Excellent quality rice!"));
}

#[tokio::test]
async fn test_browse_search() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/browse?query=mango").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Fresh Carabao Mango"));
    assert!(!response.body.contains("Pechay (Bok Choy)"));
}

#[tokio::test]
async fn test_browse_price_range() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/browse?min=31&max=40").await;
    assert!(response.body.contains("Pechay (Bok Choy)"));
    assert!(!response.body.contains("Coconut (Buko)"));
}

#[tokio::test]
async fn test_browse_with_cleared_price_field() {
    let mut app = TestApp::new();
    let response = app
        .get("/marketplace/browse?query=&category=all&min=&max=300&sort=rating")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Pechay (Bok Choy)"));
}

#[tokio::test]
async fn test_browse_decimal_price_bound() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/browse?min=44.5").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Saba Banana"));
    assert!(!response.body.contains("Pechay (Bok Choy)"));
}

#[tokio::test]
async fn test_browse_rejects_unknown_sort() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/browse?sort=cheapest").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_browse_rejects_non_numeric_price() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/browse?min=cheap").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_orders_default_to_purchases() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/orders").await;
    assert!(response.body.contains("Order o1"));
    assert!(response.body.contains("Order o3"));
    assert!(!response.body.contains("Order o2"));
}

#[tokio::test]
async fn test_orders_status_filter() {
    let mut app = TestApp::new();
    let response = app
        .get("/marketplace/orders?tab=purchases&status=delivered")
        .await;
    assert!(response.body.contains("Order o3"));
    assert!(!response.body.contains("Order o1"));
}

#[tokio::test]
async fn test_orders_empty_status() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/orders?status=cancelled").await;
    assert!(response.body.contains("No cancelled orders."));
}

#[tokio::test]
async fn test_sales_tab_offers_next_step() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/orders?tab=sales").await;
    assert!(response.body.contains("Order o1"));
    assert!(response.body.contains("Mark as Delivered"));
    assert!(!response.body.contains("Order o3"));
}

#[tokio::test]
async fn test_unknown_order_status_is_rejected() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/orders?status=lost").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_fertilizer_low_stock_alert() {
    let mut app = TestApp::new();
    let response = app.get("/farm/fertilizers").await;
    assert!(
        response
            .body
            .contains("1 item below minimum stock level. Please reorder soon.")
    );
}

#[tokio::test]
async fn test_my_listings_show_current_seller() {
    let mut app = TestApp::new();
    let response = app.get("/marketplace/my-listings").await;
    assert!(response.body.contains("Premium Rice (Sinandomeng)"));
    assert!(response.body.contains("Coconut (Buko)"));
    assert!(!response.body.contains("Fresh Carabao Mango"));
}

#[tokio::test]
async fn test_messages_open_requested_contact() {
    let mut app = TestApp::new();
    let response = app.get("/messages?contact=s1").await;
    assert!(response.body.contains("Available pa po ba yung rice?"));
}
