//! Liveness route tests

use axum_test::TestServer;
use trendpulse::core::http::{create_router, LIVENESS_BODY};

#[tokio::test]
async fn root_reports_running() {
    let server = TestServer::new(create_router()).expect("start test server");

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), LIVENESS_BODY);
    assert_eq!(response.text(), "Signal bot is running");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::new(create_router()).expect("start test server");

    let response = server.get("/health").expect_failure().await;

    assert_eq!(response.status_code(), 404);
}
