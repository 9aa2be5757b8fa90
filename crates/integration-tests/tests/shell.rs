//! Role selection, navigation and theme persistence through the full router.

use axum::http::StatusCode;
use philagri_integration_tests::TestApp;

const FARM_NAV: [&str; 6] = [
    "/farm/dashboard",
    "/farm/workers",
    "/farm/crops",
    "/farm/machines",
    "/farm/fertilizers",
    "/farm/tasks",
];

const MARKETPLACE_NAV: [&str; 4] = [
    "/marketplace/dashboard",
    "/marketplace/browse",
    "/marketplace/my-listings",
    "/marketplace/orders",
];

fn has_link(body: &str, path: &str) -> bool {
    body.contains(&format!("href=\"{path}\""))
}

#[tokio::test]
async fn test_health() {
    let mut app = TestApp::new();
    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_root_renders_chooser_without_shell() {
    let mut app = TestApp::new();
    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Welcome to Philagri"));
    assert!(response.body.contains("Enter Farm Management"));
    assert!(response.body.contains("Enter Marketplace"));
    assert!(!response.body.contains("class=\"sidebar\""));
}

#[tokio::test]
async fn test_default_role_is_farm_owner() {
    let mut app = TestApp::new();
    let response = app.get("/profile").await;
    assert_eq!(response.status, StatusCode::OK);
    for path in FARM_NAV {
        assert!(has_link(&response.body, path), "missing {path}");
    }
    for path in MARKETPLACE_NAV {
        assert!(!has_link(&response.body, path), "unexpected {path}");
    }
}

#[tokio::test]
async fn test_selecting_marketplace_switches_navigation() {
    let mut app = TestApp::new();

    let response = app.post_form("/role", "role=marketplace").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/marketplace/dashboard"));

    let response = app.get("/profile").await;
    for path in MARKETPLACE_NAV {
        assert!(has_link(&response.body, path), "missing {path}");
    }
    for path in FARM_NAV {
        assert!(!has_link(&response.body, path), "unexpected {path}");
    }
    assert!(response.body.contains("Marketplace"));
}

#[tokio::test]
async fn test_root_ignores_selected_role() {
    let mut app = TestApp::new();
    app.post_form("/role", "role=marketplace").await;

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Welcome to Philagri"));
}

#[tokio::test]
async fn test_role_selection_is_idempotent() {
    let mut app = TestApp::new();
    app.post_form("/role", "role=farmowner").await;
    let response = app.post_form("/role", "role=farmowner").await;
    assert_eq!(response.location(), Some("/farm/dashboard"));

    let response = app.get("/farm/dashboard").await;
    assert!(has_link(&response.body, "/farm/tasks"));
}

#[tokio::test]
async fn test_unknown_role_is_rejected() {
    let mut app = TestApp::new();
    let response = app.post_form("/role", "role=admin").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_badges_show_initial_counters() {
    let mut app = TestApp::new();
    let response = app.get("/farm/dashboard").await;
    assert!(response.body.contains("<span class=\"badge\">3</span>"));
    assert!(response.body.contains("<span class=\"badge\">5</span>"));
}

#[tokio::test]
async fn test_theme_toggle_persists_cookie() {
    let mut app = TestApp::new();

    let response = app.get("/farm/crops").await;
    assert!(response.body.contains("data-theme=\"light\""));

    let response = app.post_form("/theme", "return_to=%2Ffarm%2Fcrops").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/farm/crops"));
    assert_eq!(response.set_cookie("philagri-theme").as_deref(), Some("dark"));

    let response = app.get("/farm/crops").await;
    assert!(response.body.contains("data-theme=\"dark\""));

    let response = app.post_form("/theme", "return_to=%2Ffarm%2Fcrops").await;
    assert_eq!(response.set_cookie("philagri-theme").as_deref(), Some("light"));
}

#[tokio::test]
async fn test_stored_dark_theme_is_restored() {
    let mut app = TestApp::new();
    app.set_cookie("philagri-theme", "dark");

    let response = app.get("/").await;
    assert!(response.body.contains("data-theme=\"dark\""));
}

#[tokio::test]
async fn test_theme_ignores_offsite_return() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/theme", "return_to=https%3A%2F%2Fexample.com")
        .await;
    assert_eq!(response.location(), Some("/"));

    let response = app.post_form("/theme", "return_to=%2F%5Cevil.example").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}
