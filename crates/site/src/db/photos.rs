//! Gallery photo repository.

use sqlx::PgPool;

use hearth_core::PhotoId;

use super::RepositoryError;
use crate::models::{Photo, PhotoInput, PhotoUpdate};

const COLUMNS: &str = "id, url, caption, sort_order, created_at";

/// Repository for gallery photos.
pub struct PhotoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PhotoRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Photo>, RepositoryError> {
        let rows = sqlx::query_as::<_, Photo>(&format!(
            "SELECT {COLUMNS} FROM photos ORDER BY sort_order, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &PhotoInput) -> Result<Photo, RepositoryError> {
        let row = sqlx::query_as::<_, Photo>(&format!(
            "INSERT INTO photos (url, caption, sort_order) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(&input.url)
        .bind(&input.caption)
        .bind(input.sort_order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace the caption and, when given, the sort order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no photo has this ID.
    pub async fn update(&self, id: PhotoId, update: &PhotoUpdate) -> Result<Photo, RepositoryError> {
        sqlx::query_as::<_, Photo>(&format!(
            "UPDATE photos SET caption = $2, sort_order = COALESCE($3, sort_order) \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&update.caption)
        .bind(update.sort_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no photo has this ID.
    pub async fn delete(&self, id: PhotoId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
