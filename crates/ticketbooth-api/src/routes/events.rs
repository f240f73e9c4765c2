//! Routes for event listing, creation, and ticket reservation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use ticketbooth_core::error::DomainError;
use ticketbooth_core::record::{EventId, EventRecord, TicketId};
use ticketbooth_inventory::domain::commands::{BookTickets, CreateEvent};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /events.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Display name; must not be blank.
    pub name: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// Capacity; must be positive.
    pub total_tickets: u32,
}

/// Query string for POST /reserve.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveParams {
    /// The event to book against.
    pub event_id: Option<String>,
    /// Number of tickets, parsed by the handler so bad input gets a JSON error.
    pub tickets: Option<String>,
}

/// GET /events
#[instrument(skip(state))]
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventRecord>>, ApiError> {
    info!("listing events");
    let events = state.inventory.list_events().await?;
    Ok(Json(events))
}

/// POST /events
#[instrument(skip(state, request), fields(name = %request.name))]
async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventRecord>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(DomainError::InvalidArgument("event name must not be blank".into()).into());
    }
    if request.total_tickets == 0 {
        return Err(DomainError::InvalidArgument("totalTickets must be positive".into()).into());
    }

    let command = CreateEvent {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        date: request.date,
        total_tickets: request.total_tickets,
    };

    info!(correlation_id = %command.correlation_id, "handling create_event command");

    let event = state.inventory.create_event(&command).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events/{event_id}
#[instrument(skip(state))]
async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventRecord>, ApiError> {
    let event = state.inventory.event_by_id(&EventId::new(event_id)).await?;
    Ok(Json(event))
}

/// POST /reserve?eventId=..&tickets=..
#[instrument(skip(state, params), fields(event_id = ?params.event_id))]
async fn reserve_tickets(
    State(state): State<AppState>,
    Query(params): Query<ReserveParams>,
) -> Result<Json<Vec<TicketId>>, ApiError> {
    let event_id = params
        .event_id
        .ok_or_else(|| DomainError::InvalidArgument("eventId is required".into()))?;
    let tickets = params
        .tickets
        .ok_or_else(|| DomainError::InvalidArgument("tickets is required".into()))?;
    let count = parse_ticket_count(&tickets)?;
    let command = BookTickets {
        correlation_id: Uuid::new_v4(),
        event_id: EventId::new(event_id),
        count,
    };

    info!(correlation_id = %command.correlation_id, "handling book_tickets command");

    let tickets = state.inventory.book_tickets(&command).await?;
    Ok(Json(tickets))
}

fn parse_ticket_count(raw: &str) -> Result<u32, DomainError> {
    let requested: i64 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::InvalidArgument(format!("tickets must be an integer: {e}")))?;
    u32::try_from(requested).map_err(|_| {
        DomainError::InvalidArgument(format!("tickets out of range: {requested}"))
    })
}

/// Returns the router for event and reservation endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{event_id}", get(get_event))
        .route("/reserve", post(reserve_tickets))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::NonZeroUsize;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use ticketbooth_test_support::{FixedClock, SequenceIdGenerator, fixed_now};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState::in_memory(
            Arc::new(FixedClock(fixed_now())),
            Arc::new(SequenceIdGenerator::new("id")),
            NonZeroUsize::new(2).unwrap(),
        );
        router().with_state(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn create_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/events")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    fn reserve_request(event_id: &str, tickets: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/reserve?eventId={event_id}&tickets={tickets}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_event_returns_201_with_record() {
        // Arrange
        let app = test_app();
        let body = serde_json::json!({
            "name": "Concert",
            "date": "2026-06-01T20:00:00Z",
            "totalTickets": 3
        });

        // Act
        let (status, json) = send(&app, create_request(&body)).await;

        // Assert
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["id"], "id-1");
        assert_eq!(json["name"], "Concert");
        assert_eq!(json["totalTickets"], 3);
        assert_eq!(json["availableTickets"], 3);
    }

    #[tokio::test]
    async fn test_create_event_rejects_blank_name() {
        let app = test_app();
        let body = serde_json::json!({
            "name": "  ",
            "date": "2026-06-01T20:00:00Z",
            "totalTickets": 3
        });

        let (status, json) = send(&app, create_request(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_argument");
    }

    #[tokio::test]
    async fn test_create_event_rejects_zero_tickets() {
        let app = test_app();
        let body = serde_json::json!({
            "name": "Concert",
            "date": "2026-06-01T20:00:00Z",
            "totalTickets": 0
        });

        let (status, json) = send(&app, create_request(&body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_argument");
    }

    #[tokio::test]
    async fn test_create_event_returns_422_for_missing_fields() {
        let app = test_app();

        let (status, _) = send(&app, create_request(&serde_json::json!({}))).await;

        // Axum returns 422 for deserialization failures.
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_reserve_returns_ticket_ids() {
        // Arrange
        let app = test_app();
        let body = serde_json::json!({
            "name": "Concert",
            "date": "2026-06-01T20:00:00Z",
            "totalTickets": 3
        });
        send(&app, create_request(&body)).await;

        // Act
        let (status, json) = send(&app, reserve_request("id-1", "2")).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!(["id-2", "id-3"]));
    }

    #[tokio::test]
    async fn test_reserve_unknown_event_returns_404() {
        let app = test_app();

        let (status, json) = send(&app, reserve_request("ghost", "1")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "event_not_found");
    }

    #[tokio::test]
    async fn test_reserve_rejects_non_numeric_and_negative_counts() {
        let app = test_app();

        let (non_numeric, json) = send(&app, reserve_request("id-1", "many")).await;
        let (negative, _) = send(&app, reserve_request("id-1", "-2")).await;
        let (zero, _) = send(&app, reserve_request("id-1", "0")).await;

        assert_eq!(non_numeric, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_argument");
        assert_eq!(negative, StatusCode::BAD_REQUEST);
        assert_eq!(zero, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reserve_missing_query_params_returns_json_400() {
        let app = test_app();
        let without_tickets = Request::builder()
            .method("POST")
            .uri("/reserve?eventId=x")
            .body(Body::empty())
            .unwrap();
        let without_event = Request::builder()
            .method("POST")
            .uri("/reserve?tickets=1")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(&app, without_tickets).await;
        let (other_status, other_json) = send(&app, without_event).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_argument");
        assert_eq!(other_status, StatusCode::BAD_REQUEST);
        assert_eq!(other_json["error"], "invalid_argument");
    }

    #[tokio::test]
    async fn test_get_unknown_event_returns_404() {
        let app = test_app();
        let request = Request::builder()
            .uri("/events/missing")
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(&app, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "event_not_found");
    }

    #[test]
    fn test_parse_ticket_count_accepts_surrounding_whitespace() {
        assert_eq!(parse_ticket_count(" 4 ").unwrap(), 4);
    }

    #[test]
    fn test_parse_ticket_count_rejects_values_above_u32() {
        let result = parse_ticket_count("4294967296");

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }
}
