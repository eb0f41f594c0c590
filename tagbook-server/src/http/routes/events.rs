//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::images::ImageResponse;
use super::persons::PersonResponse;
use crate::db::repos::{Event, EventDetail, EventRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, EntityId};
use crate::http::server::AppState;
use crate::models::{NewEvent, Pagination, PaginationParams};

/// Create event request
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    /// Seconds since the Unix epoch
    pub event_date: i64,
}

/// Event response
///
/// Keys are PascalCase, the shape the frontend bundle reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventResponse {
    #[serde(rename = "EventID")]
    pub event_id: i64,
    #[serde(rename = "AccountID")]
    pub account_id: i64,
    pub title: String,
    pub description: String,
    pub event_date: String,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            event_id: e.event_id,
            account_id: e.account_id,
            title: e.title,
            description: e.description,
            event_date: e.event_date.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Event with tagged persons and images
#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub event: EventResponse,
    pub persons: Vec<PersonResponse>,
    pub images: Vec<ImageResponse>,
}

impl From<EventDetail> for EventDetailResponse {
    fn from(d: EventDetail) -> Self {
        Self {
            event: d.event.into(),
            persons: d.persons.into_iter().map(PersonResponse::from).collect(),
            images: d.images.into_iter().map(ImageResponse::from).collect(),
        }
    }
}

/// Body returned by POST /api/events
#[derive(Debug, Serialize, Deserialize)]
pub struct EventCreated {
    #[serde(rename = "EventID")]
    pub event_id: i64,
}

/// GET /api/events - list events
async fn list_events(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let page = Pagination::from(params);
    let events = EventRepo::new(&state.pool).list(page).await?;

    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// POST /api/events - create an event
async fn create_event(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventCreated>), ApiError> {
    let event = NewEvent::new(req.title, req.description, req.event_date)?;
    let event_id = EventRepo::new(&state.pool).create(&event).await?;

    Ok((StatusCode::CREATED, Json(EventCreated { event_id })))
}

/// GET /api/events/{id} - get an event with its tagged persons and images
async fn get_event(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<EventDetailResponse>, ApiError> {
    let detail = EventRepo::new(&state.pool).detail(id).await?;
    Ok(Json(EventDetailResponse::from(detail)))
}

/// DELETE /api/events/{id} - delete an event
async fn delete_event(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    EventRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Event routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", get(get_event).delete(delete_event))
}
