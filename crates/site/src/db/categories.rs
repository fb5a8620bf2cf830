//! Category repository.

use sqlx::PgPool;

use hearth_core::CategoryId;

use super::RepositoryError;
use crate::models::{Category, CategoryInput};

const COLUMNS: &str = "id, name, description, sort_order, created_at, updated_at";

/// Repository for menu categories.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM categories ORDER BY sort_order, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &CategoryInput) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (name, description, sort_order) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.sort_order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this ID.
    pub async fn update(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, RepositoryError> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET name = $2, description = $3, sort_order = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.sort_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete a category and, through the foreign key, its menu items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this ID.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
