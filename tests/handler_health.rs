mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use shortlink::api::handlers::{health_handler, not_found_handler};

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
    assert_eq!(json["checks"]["sessions"]["message"], "Active: 0 (max 100)");
    assert_eq!(
        json["checks"]["latency"]["message"],
        "Simulated delay: disabled"
    );
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = Router::new().fallback(not_found_handler);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status_not_found();
    response.assert_json(&json!({
        "error": {
            "code": "not_found",
            "message": "Route not found",
            "details": { "path": "/abc123" }
        }
    }));
}
