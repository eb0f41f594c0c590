//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool, constructed per request
//! - Writes run in a transaction that rolls back on drop unless committed
//! - Relies on store constraints for uniqueness (no check-then-insert)

pub mod accounts;
pub mod events;
pub mod images;
pub mod persons;
pub mod tagging;

pub use accounts::{Account, AccountRepo};
pub use events::{Event, EventDetail, EventRepo};
pub use images::{Image, ImageRepo, ImageWithPath};
pub use persons::{Person, PersonRepo};
pub use tagging::TaggingRepo;

use sqlx::{MySql, QueryBuilder};

use crate::models::Pagination;
use crate::storage::StorageError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicated: {resource}")]
    Conflict { resource: &'static str },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify an insert failure: unique violations become `Conflict`.
    pub(crate) fn on_insert(resource: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict { resource },
            _ => Self::Sqlx(err),
        }
    }
}

/// Row count MySQL documents as "no limit", used when only an offset is given.
const MYSQL_MAX_ROWS: u64 = u64::MAX;

/// Append `LIMIT ? OFFSET ?` with bound values.
///
/// MySQL has no OFFSET without LIMIT, so an offset alone gets the maximum row count.
pub(crate) fn push_window(qb: &mut QueryBuilder<'_, MySql>, page: Pagination) {
    if page.is_unbounded() {
        return;
    }

    qb.push(" LIMIT ");
    qb.push_bind(page.limit.unwrap_or(MYSQL_MAX_ROWS));

    if let Some(offset) = page.offset {
        qb.push(" OFFSET ");
        qb.push_bind(offset);
    }
}
