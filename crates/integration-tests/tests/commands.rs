//! Transient commands: each renders its page once with a flash and stores
//! nothing.

use axum::http::StatusCode;
use philagri_integration_tests::TestApp;

#[tokio::test]
async fn test_start_task() {
    let mut app = TestApp::new();
    let response = app.post_form("/farm/tasks/t4/status", "status=in-progress").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Task updated to in-progress"));
    assert!(response.body.contains("In Progress (3)"));
}

#[tokio::test]
async fn test_task_update_is_not_stored() {
    let mut app = TestApp::new();
    app.post_form("/farm/tasks/t4/status", "status=in-progress").await;

    let response = app.get("/farm/tasks").await;
    assert!(response.body.contains("In Progress (2)"));
    assert!(response.body.contains("Pending (2)"));
}

#[tokio::test]
async fn test_task_skip_is_a_conflict() {
    let mut app = TestApp::new();
    let response = app.post_form("/farm/tasks/t4/status", "status=completed").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.body.contains("cannot move task from pending to completed"));
}

#[tokio::test]
async fn test_unknown_task_keeps_board() {
    let mut app = TestApp::new();
    let response = app.post_form("/farm/tasks/t99/status", "status=completed").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("flash-error"));
    assert!(response.body.contains("no task with id t99"));
    assert!(response.body.contains("Pending (2)"));
}

#[tokio::test]
async fn test_invalid_status_value() {
    let mut app = TestApp::new();
    let response = app.post_form("/farm/tasks/t4/status", "status=done").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_worker_is_acknowledged() {
    let mut app = TestApp::new();
    let response = app.post_form("/farm/workers", "name=Pedro+Penduko").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Worker added successfully!"));
    assert!(!response.body.contains("Pedro Penduko"));
}

#[tokio::test]
async fn test_deliver_shipped_sale() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/marketplace/orders/o1/status", "status=delivered")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Order o1 updated to delivered"));
}

#[tokio::test]
async fn test_cancel_shipped_sale_is_a_conflict() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/marketplace/orders/o1/status", "status=cancelled")
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.body.contains("cannot move order from shipped to cancelled"));
}

#[tokio::test]
async fn test_purchase_is_not_a_sale() {
    // o3 was bought by the demo buyer; only sales can be updated
    let mut app = TestApp::new();
    let response = app
        .post_form("/marketplace/orders/o3/status", "status=delivered")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("no order with id o3"));
}

#[tokio::test]
async fn test_toggle_listing() {
    let mut app = TestApp::new();
    let response = app.post_form("/marketplace/my-listings/1/toggle", "").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Product availability updated!"));
    assert!(response.body.contains(">Activate<"));
}

#[tokio::test]
async fn test_delete_listing() {
    let mut app = TestApp::new();
    let response = app.post_form("/marketplace/my-listings/4/delete", "").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Product deleted successfully!"));
    assert!(!response.body.contains("Coconut (Buko)"));
    assert!(response.body.contains("Premium Rice (Sinandomeng)"));
}

#[tokio::test]
async fn test_toggle_foreign_listing() {
    // product 2 belongs to another seller
    let mut app = TestApp::new();
    let response = app.post_form("/marketplace/my-listings/2/toggle", "").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("no listing with id 2"));
}

#[tokio::test]
async fn test_add_listing_is_acknowledged() {
    let mut app = TestApp::new();
    let response = app.post_form("/marketplace/my-listings", "name=Calamansi").await;
    assert!(response.body.contains("Product added successfully!"));
    assert!(!response.body.contains("Calamansi"));
}

#[tokio::test]
async fn test_send_message() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/messages", "to=s1&content=See+you+on+Friday")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Message sent!"));
    assert!(response.body.contains("See you on Friday"));

    let response = app.get("/messages").await;
    assert!(!response.body.contains("See you on Friday"));
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let mut app = TestApp::new();
    let response = app.post_form("/messages", "to=s1&content=+++").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_message_to_stranger() {
    let mut app = TestApp::new();
    let response = app.post_form("/messages", "to=s9&content=Hello").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("no contact with id s9"));
}

#[tokio::test]
async fn test_save_profile_draft() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/profile", "name=Juan+Reyes&email=&phone=&location=")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Profile updated successfully!"));
    assert!(response.body.contains("value=\"Juan Reyes\""));
    assert!(response.body.contains("value=\"demo@farmph.com\""));

    let response = app.get("/profile").await;
    assert!(response.body.contains("value=\"Demo User\""));
}

#[tokio::test]
async fn test_place_order() {
    let mut app = TestApp::new();
    let response = app.post_form("/product/1/order", "quantity=5").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .body
            .contains("Order placed for 5 kg of Premium Rice (Sinandomeng)!")
    );
    assert!(response.body.contains("http-equiv=\"refresh\""));
    assert!(response.body.contains("url=/marketplace/orders"));
}

#[tokio::test]
async fn test_order_quantity_is_clamped() {
    let mut app = TestApp::new();
    let response = app.post_form("/product/1/order", "quantity=0").await;
    assert!(response.body.contains("Order placed for 1 kg"));
}

#[tokio::test]
async fn test_order_unknown_product() {
    let mut app = TestApp::new();
    let response = app.post_form("/product/999/order", "quantity=1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
