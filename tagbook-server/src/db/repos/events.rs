//! Event repository
//!
//! Besides plain CRUD this composes the event detail view: one event plus
//! every person and image tagged to it.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use super::images::{Image, ImageWithPath};
use super::persons::Person;
use super::{push_window, DbError};
use crate::models::{NewEvent, Pagination};

/// Event record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub account_id: i64,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
}

/// An event with its tagged persons and images
#[derive(Debug, Clone)]
pub struct EventDetail {
    pub event: Event,
    pub persons: Vec<Person>,
    pub images: Vec<ImageWithPath>,
}

/// Event repository
pub struct EventRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> EventRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List events ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Event>, DbError> {
        let mut qb = QueryBuilder::<MySql>::new(
            "SELECT event_id, account_id, title, description, event_date FROM events ORDER BY event_id",
        );
        push_window(&mut qb, page);

        let events = qb.build_query_as::<Event>().fetch_all(self.pool).await?;
        Ok(events)
    }

    /// Get a single event by id.
    pub async fn get(&self, id: i64) -> Result<Event, DbError> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, account_id, title, description, event_date
            FROM events
            WHERE event_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("event", id))
    }

    /// Get an event with every person and image tagged to it.
    ///
    /// Runs on one pooled connection. Tagging rows that point at deleted
    /// persons or images are skipped; an event with no tags gets empty lists.
    pub async fn detail(&self, id: i64) -> Result<EventDetail, DbError> {
        let mut conn = self.pool.acquire().await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, account_id, title, description, event_date
            FROM events
            WHERE event_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DbError::not_found("event", id))?;

        let persons = sqlx::query_as::<_, Person>(
            r#"
            SELECT person_id, first_name, last_name
            FROM persons
            WHERE person_id IN (
                SELECT DISTINCT person_id FROM event_person_tagging WHERE event_id = ?
            )
            ORDER BY person_id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT image_id, image_name, mime_type
            FROM images
            WHERE image_id IN (
                SELECT DISTINCT image_id FROM event_image_tagging WHERE event_id = ?
            )
            ORDER BY image_id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(EventDetail {
            event,
            persons,
            images: images.into_iter().map(ImageWithPath::from).collect(),
        })
    }

    /// Insert an event, returning the generated id.
    pub async fn create(&self, event: &NewEvent) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO events (account_id, title, description, event_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(event.account_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_date)
        .execute(&mut *tx)
        .await
        .map_err(DbError::on_insert("event"))?;

        let id = result.last_insert_id() as i64;
        tx.commit().await?;

        tracing::debug!(event_id = id, "event created");
        Ok(id)
    }

    /// Delete an event by id (idempotent).
    ///
    /// Tagging rows that reference the event are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM events WHERE event_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(event_id = id, rows = result.rows_affected(), "event deleted");
        Ok(())
    }
}
