mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::links_handler;
use shortlink::utils::session_id::SessionId;

#[tokio::test]
async fn test_links_empty_for_new_session() {
    let state = common::create_test_state();
    let app = common::with_sessions(
        Router::new().route("/api/links", get(links_handler)),
        state,
    );
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(response.cookie("sl_session").value().len(), 32);
}

#[tokio::test]
async fn test_links_reads_existing_session() {
    let state = common::create_test_state();
    let app = common::with_sessions(
        Router::new().route("/api/links", get(links_handler)),
        state.clone(),
    );
    let server = TestServer::new(app).unwrap();

    let cookie = server.get("/api/links").await.cookie("sl_session");
    let session = SessionId::parse(cookie.value()).unwrap();
    state
        .shortener_service
        .shorten_for_session(&state.sessions, &session, "https://example.com")
        .await
        .unwrap();

    let response = server.get("/api/links").add_cookie(cookie).await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["original_url"], "https://example.com");
    assert_eq!(json["items"][0]["clicks"], 0);
    assert!(response.maybe_cookie("sl_session").is_none());
}
