//! Ticketbooth HTTP transport.
//!
//! Exposes the inventory service over JSON: list and create events, look
//! one up, and reserve tickets.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full application router over `state`.
pub fn app(state: state::AppState) -> Router {
    // TODO: restrict CORS to the booking client origin once it is deployed.
    Router::new()
        .merge(routes::health::router())
        .merge(routes::events::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
