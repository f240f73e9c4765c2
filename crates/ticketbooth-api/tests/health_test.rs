//! Integration test for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok_and_version() {
    let app = common::build_test_app(4);

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
