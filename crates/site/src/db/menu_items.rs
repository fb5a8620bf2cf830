//! Menu item repository.

use sqlx::PgPool;

use hearth_core::{CategoryId, MenuItemId};

use super::RepositoryError;
use crate::models::{MenuItem, MenuItemInput};

const COLUMNS: &str = "id, category_id, name, description, price, image_url, is_available, \
                       sort_order, created_at, updated_at";

/// Repository for menu items.
pub struct MenuItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuItemRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Menu items in display order, optionally limited to one category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        category_id: Option<CategoryId>,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {COLUMNS} FROM menu_items \
             WHERE ($1::INT4 IS NULL OR category_id = $1) \
             ORDER BY sort_order, id"
        ))
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Available items only, for the public menu page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_available(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {COLUMNS} FROM menu_items WHERE is_available ORDER BY sort_order, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the category does not exist.
    pub async fn create(&self, input: &MenuItemInput) -> Result<MenuItem, RepositoryError> {
        let row = sqlx::query_as::<_, MenuItem>(&format!(
            "INSERT INTO menu_items \
                 (category_id, name, description, price, image_url, is_available, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
        ))
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.is_available)
        .bind(input.sort_order)
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "menu item"))?;

        Ok(row)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this ID and
    /// `RepositoryError::Conflict` if the category does not exist.
    pub async fn update(
        &self,
        id: MenuItemId,
        input: &MenuItemInput,
    ) -> Result<MenuItem, RepositoryError> {
        sqlx::query_as::<_, MenuItem>(&format!(
            "UPDATE menu_items SET category_id = $2, name = $3, description = $4, price = $5, \
                 image_url = $6, is_available = $7, sort_order = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.is_available)
        .bind(input.sort_order)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, "menu item"))?
        .ok_or(RepositoryError::NotFound)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this ID.
    pub async fn delete(&self, id: MenuItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
