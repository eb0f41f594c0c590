//! Event input

use chrono::{DateTime, Utc};

use super::ValidationError;

/// Account that owns every event created through the API.
pub const DEFAULT_ACCOUNT_ID: i64 = 1;

/// Earliest storable `event_date`, 1000-01-01T00:00:00Z (MySQL `DATETIME` floor).
pub const MIN_EVENT_TIMESTAMP: i64 = -30_610_224_000;

/// Latest storable `event_date`, 9999-12-31T23:59:59Z (MySQL `DATETIME` ceiling).
pub const MAX_EVENT_TIMESTAMP: i64 = 253_402_300_799;

/// Fields for a new event row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub account_id: i64,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
}

impl NewEvent {
    /// Build a new event for the default account.
    ///
    /// `event_date` is seconds since the Unix epoch. Anything outside
    /// [`MIN_EVENT_TIMESTAMP`]..=[`MAX_EVENT_TIMESTAMP`] is rejected, since
    /// the `DATETIME` column only holds years 1000 through 9999.
    ///
    /// # Example
    /// ```
    /// use tagbook_server::models::NewEvent;
    ///
    /// let event = NewEvent::new("Launch".into(), "".into(), 1_700_000_000).unwrap();
    /// assert_eq!(event.event_date.timestamp(), 1_700_000_000);
    /// assert!(NewEvent::new("x".into(), "".into(), 253_402_300_800).is_err());
    /// ```
    pub fn new(title: String, description: String, event_date: i64) -> Result<Self, ValidationError> {
        let out_of_range = ValidationError::OutOfRange { field: "event_date" };
        if !(MIN_EVENT_TIMESTAMP..=MAX_EVENT_TIMESTAMP).contains(&event_date) {
            return Err(out_of_range);
        }
        let event_date = DateTime::<Utc>::from_timestamp(event_date, 0).ok_or(out_of_range)?;

        Ok(Self {
            account_id: DEFAULT_ACCOUNT_ID,
            title,
            description,
            event_date,
        })
    }
}
