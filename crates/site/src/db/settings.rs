//! Site settings repository.

use serde_json::{Map, Value};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Setting;

/// Repository for key/value settings.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All settings folded into one JSON object, keyed by setting key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all(&self) -> Result<Map<String, Value>, RepositoryError> {
        let rows = sqlx::query_as::<_, Setting>(
            "SELECT key, value, updated_at FROM settings ORDER BY key",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }

    /// Insert or replace a setting.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the upsert fails.
    pub async fn set(&self, key: &str, value: &Value) -> Result<Setting, RepositoryError> {
        let row = sqlx::query_as::<_, Setting>(
            r"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING key, value, updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the key is not set.
    pub async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM settings WHERE key = $1")
            .bind(key)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
