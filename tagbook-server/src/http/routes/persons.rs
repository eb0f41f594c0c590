//! Person endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Person, PersonRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, EntityId};
use crate::http::server::AppState;
use crate::models::{NewPerson, Pagination, PaginationParams};

/// Create person request
#[derive(Deserialize)]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Person response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonResponse {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            person_id: p.person_id,
            first_name: p.first_name,
            last_name: p.last_name,
        }
    }
}

/// Body returned by POST /api/persons
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonCreated {
    #[serde(rename = "PersonID")]
    pub person_id: i64,
}

/// GET /api/persons - list persons
async fn list_persons(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let page = Pagination::from(params);
    let persons = PersonRepo::new(&state.pool).list(page).await?;

    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// POST /api/persons - create a person
async fn create_person(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonCreated>), ApiError> {
    let person = NewPerson::new(req.first_name, req.last_name);
    let person_id = PersonRepo::new(&state.pool).create(&person).await?;

    Ok((StatusCode::CREATED, Json(PersonCreated { person_id })))
}

/// GET /api/persons/{id} - get a single person
async fn get_person(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = PersonRepo::new(&state.pool).get(id).await?;
    Ok(Json(PersonResponse::from(person)))
}

/// DELETE /api/persons/{id} - delete a person
async fn delete_person(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    PersonRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Person routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/persons", get(list_persons).post(create_person))
        .route("/api/persons/{id}", get(get_person).delete(delete_person))
}
