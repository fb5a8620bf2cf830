//! Gift-shop item repository.

use sqlx::PgPool;

use hearth_core::GiftShopItemId;

use super::RepositoryError;
use crate::models::{GiftShopItem, GiftShopItemInput};

const COLUMNS: &str =
    "id, name, description, price, image_url, is_available, sort_order, created_at, updated_at";

/// Repository for gift-shop items.
pub struct GiftShopRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GiftShopRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Items in display order. With `available_only`, hidden items are skipped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, available_only: bool) -> Result<Vec<GiftShopItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, GiftShopItem>(&format!(
            "SELECT {COLUMNS} FROM gift_shop_items \
             WHERE is_available OR NOT $1 \
             ORDER BY sort_order, id"
        ))
        .bind(available_only)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &GiftShopItemInput) -> Result<GiftShopItem, RepositoryError> {
        let row = sqlx::query_as::<_, GiftShopItem>(&format!(
            "INSERT INTO gift_shop_items \
                 (name, description, price, image_url, is_available, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.is_available)
        .bind(input.sort_order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this ID.
    pub async fn update(
        &self,
        id: GiftShopItemId,
        input: &GiftShopItemInput,
    ) -> Result<GiftShopItem, RepositoryError> {
        sqlx::query_as::<_, GiftShopItem>(&format!(
            "UPDATE gift_shop_items SET name = $2, description = $3, price = $4, image_url = $5, \
                 is_available = $6, sort_order = $7, updated_at = NOW() \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.image_url)
        .bind(input.is_available)
        .bind(input.sort_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has this ID.
    pub async fn delete(&self, id: GiftShopItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM gift_shop_items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
