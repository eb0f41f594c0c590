//! Person repository

use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use super::{push_window, DbError};
use crate::models::{NewPerson, Pagination};

/// Person record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Person repository
pub struct PersonRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PersonRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List persons ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Person>, DbError> {
        let mut qb = QueryBuilder::<MySql>::new(
            "SELECT person_id, first_name, last_name FROM persons ORDER BY person_id",
        );
        push_window(&mut qb, page);

        let persons = qb.build_query_as::<Person>().fetch_all(self.pool).await?;
        Ok(persons)
    }

    /// Get a single person by id.
    pub async fn get(&self, id: i64) -> Result<Person, DbError> {
        sqlx::query_as::<_, Person>(
            r#"
            SELECT person_id, first_name, last_name
            FROM persons
            WHERE person_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("person", id))
    }

    /// Insert a person, returning the generated id.
    pub async fn create(&self, person: &NewPerson) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO persons (first_name, last_name) VALUES (?, ?)")
            .bind(&person.first_name)
            .bind(&person.last_name)
            .execute(&mut *tx)
            .await
            .map_err(DbError::on_insert("person"))?;

        let id = result.last_insert_id() as i64;
        tx.commit().await?;

        tracing::debug!(person_id = id, "person created");
        Ok(id)
    }

    /// Delete a person by id (idempotent).
    ///
    /// Tagging rows that reference the person are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM persons WHERE person_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(person_id = id, rows = result.rows_affected(), "person deleted");
        Ok(())
    }
}
