mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::analytics_handler;

#[tokio::test]
async fn test_analytics_snapshot() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/analytics", get(analytics_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/analytics").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["stats"][0]["title"], "Total Clicks");
    assert_eq!(json["stats"][0]["value"], "2,847");
    assert_eq!(json["clicks_over_time"].as_array().unwrap().len(), 7);
    assert_eq!(json["clicks_over_time"][4]["day"], "Fri");
    assert_eq!(json["clicks_over_time"][4]["clicks"], 156);
    assert_eq!(json["locations"][0]["country"], "United States");
    assert_eq!(json["locations"][0]["percentage"], 45);
    assert_eq!(json["top_urls"][0]["url"], "short.ly/abc123");
}

#[tokio::test]
async fn test_analytics_ignores_session_links() {
    let state = common::create_test_state();
    let (session, created) = state.sessions.resolve(None);
    assert!(created);
    state
        .shortener_service
        .shorten_for_session(&state.sessions, &session, "https://example.com")
        .await
        .unwrap();

    let app = Router::new()
        .route("/api/analytics", get(analytics_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server
        .get("/api/analytics")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["stats"][0]["value"], "2,847");
    assert_eq!(json["top_urls"].as_array().unwrap().len(), 3);
}
