//! Image repository
//!
//! Image rows hold metadata only; the bytes live in the [`ImageStore`].
//! Creation writes both inside one transaction scope: the row is inserted,
//! the file written, and only then is the transaction committed.

use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use super::{push_window, DbError};
use crate::models::{image_path, NewImage, Pagination};
use crate::storage::ImageStore;

/// Image record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Image {
    pub image_id: i64,
    pub image_name: String,
    pub mime_type: String,
}

/// Image record with its public path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageWithPath {
    pub image: Image,
    pub image_path: String,
}

impl From<Image> for ImageWithPath {
    fn from(image: Image) -> Self {
        Self {
            image_path: image_path(image.image_id),
            image,
        }
    }
}

/// Image repository
pub struct ImageRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ImageRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List images ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Vec<ImageWithPath>, DbError> {
        let mut qb = QueryBuilder::<MySql>::new(
            "SELECT image_id, image_name, mime_type FROM images ORDER BY image_id",
        );
        push_window(&mut qb, page);

        let images = qb.build_query_as::<Image>().fetch_all(self.pool).await?;
        Ok(images.into_iter().map(ImageWithPath::from).collect())
    }

    /// Get a single image by id.
    pub async fn get(&self, id: i64) -> Result<ImageWithPath, DbError> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            SELECT image_id, image_name, mime_type
            FROM images
            WHERE image_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("image", id))?;

        Ok(image.into())
    }

    /// Insert an image row and store its bytes, returning the generated id.
    ///
    /// If the file write fails the row is rolled back, but a partially
    /// written file is not removed.
    pub async fn create(&self, image: &NewImage, store: &ImageStore) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO images (image_name, mime_type) VALUES (?, ?)")
            .bind(&image.image_name)
            .bind(&image.mime_type)
            .execute(&mut *tx)
            .await
            .map_err(DbError::on_insert("image"))?;

        let id = result.last_insert_id() as i64;
        store.save(id, image.data()).await?;

        tx.commit().await?;

        tracing::debug!(image_id = id, bytes = image.data().len(), mime = %image.mime_type, "image created");
        Ok(id)
    }

    /// Delete an image row by id (idempotent).
    ///
    /// The stored file and any tagging rows are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM images WHERE image_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(image_id = id, rows = result.rows_affected(), "image deleted");
        Ok(())
    }
}
