//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use ticketbooth_core::id::UuidGenerator;
use ticketbooth_test_support::{SteppingClock, fixed_now};
use tower::ServiceExt;

use ticketbooth_api::state::AppState;

/// Build the full app router over fresh in-memory collaborators, using the
/// same wiring as `main.rs` apart from the clock.
pub fn build_test_app(cache_capacity: usize) -> Router {
    let state = AppState::in_memory(
        Arc::new(SteppingClock::starting_at(fixed_now())),
        Arc::new(UuidGenerator),
        NonZeroUsize::new(cache_capacity).unwrap(),
    );
    ticketbooth_api::app(state)
}

/// Send a request and decode the JSON response body (`Null` if empty).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a body-less POST request and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Create an event through the API and return its id.
pub async fn create_event(app: Router, name: &str, total_tickets: u32) -> String {
    let (status, json) = post_json(
        app,
        "/events",
        &serde_json::json!({
            "name": name,
            "date": "2026-06-01T20:00:00Z",
            "totalTickets": total_tickets
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_owned()
}
