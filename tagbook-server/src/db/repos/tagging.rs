//! Tagging repository
//!
//! Binds persons and images to an event. Each call is one transaction:
//! rows are inserted in input order and the first failure aborts the batch,
//! so a call either tags everything or nothing. Referenced ids are not
//! checked for existence.

use sqlx::MySqlPool;

use super::DbError;

/// Association table and the column naming the tagged entity.
#[derive(Debug, Clone, Copy)]
enum TagTable {
    Persons,
    Images,
}

impl TagTable {
    fn insert_sql(self) -> &'static str {
        match self {
            Self::Persons => "INSERT INTO event_person_tagging (event_id, person_id) VALUES (?, ?)",
            Self::Images => "INSERT INTO event_image_tagging (event_id, image_id) VALUES (?, ?)",
        }
    }
}

/// Tagging repository
pub struct TaggingRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> TaggingRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Tag every person in `person_ids` to the event.
    pub async fn bind_persons(&self, event_id: i64, person_ids: &[i64]) -> Result<(), DbError> {
        self.bind(TagTable::Persons, event_id, person_ids).await
    }

    /// Tag every image in `image_ids` to the event.
    pub async fn bind_images(&self, event_id: i64, image_ids: &[i64]) -> Result<(), DbError> {
        self.bind(TagTable::Images, event_id, image_ids).await
    }

    async fn bind(&self, table: TagTable, event_id: i64, ids: &[i64]) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        for &id in ids {
            sqlx::query(table.insert_sql())
                .bind(event_id)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(DbError::on_insert("bind"))?;
        }

        tx.commit().await?;

        tracing::debug!(event_id, ?table, count = ids.len(), "tags bound");
        Ok(())
    }
}
