//! Tagging endpoints - bind persons and images to an event

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::Deserialize;

use crate::db::repos::TaggingRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, EntityId};
use crate::http::server::AppState;

/// One element of the POST /api/events/{id}/persons body.
///
/// Extra keys (a full person object, say) are ignored.
#[derive(Debug, Deserialize)]
pub struct PersonRef {
    pub person_id: i64,
}

/// One element of the POST /api/events/{id}/images body.
#[derive(Debug, Deserialize)]
pub struct ImageRef {
    pub image_id: i64,
}

/// POST /api/events/{id}/persons - tag persons to an event
async fn bind_persons(
    State(state): State<Arc<AppState>>,
    EntityId(event_id): EntityId,
    ApiJson(refs): ApiJson<Vec<PersonRef>>,
) -> Result<StatusCode, ApiError> {
    let ids: Vec<i64> = refs.iter().map(|r| r.person_id).collect();
    TaggingRepo::new(&state.pool)
        .bind_persons(event_id, &ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/events/{id}/images - tag images to an event
async fn bind_images(
    State(state): State<Arc<AppState>>,
    EntityId(event_id): EntityId,
    ApiJson(refs): ApiJson<Vec<ImageRef>>,
) -> Result<StatusCode, ApiError> {
    let ids: Vec<i64> = refs.iter().map(|r| r.image_id).collect();
    TaggingRepo::new(&state.pool)
        .bind_images(event_id, &ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Tagging routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/events/{id}/persons", post(bind_persons))
        .route("/api/events/{id}/images", post(bind_images))
}
