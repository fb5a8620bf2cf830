//! Business-info repository.
//!
//! The table holds at most one row, pinned to `id = 1`.

use sqlx::PgPool;

use hearth_core::hours::WeeklyHours;

use super::RepositoryError;
use crate::models::{BusinessInfo, BusinessInfoInput};

const COLUMNS: &str = "name, tagline, phone, email, address, \
     monday_open, monday_close, tuesday_open, tuesday_close, \
     wednesday_open, wednesday_close, thursday_open, thursday_close, \
     friday_open, friday_close, saturday_open, saturday_close, \
     sunday_open, sunday_close, updated_at";

/// Repository for the business-info record.
pub struct BusinessInfoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BusinessInfoRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The record, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self) -> Result<Option<BusinessInfo>, RepositoryError> {
        let row = sqlx::query_as::<_, BusinessInfo>(&format!(
            "SELECT {COLUMNS} FROM business_info WHERE id = 1"
        ))
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Weekly hours from the record, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn hours(&self) -> Result<Option<WeeklyHours>, RepositoryError> {
        Ok(self.get().await?.map(|info| info.hours))
    }

    /// Create or replace the record. Empty hour strings are stored as `NULL`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the upsert fails.
    pub async fn upsert(&self, input: &BusinessInfoInput) -> Result<BusinessInfo, RepositoryError> {
        let sql = format!(
            "INSERT INTO business_info (id, {insert_columns}) \
             VALUES (1, $1, $2, $3, $4, $5, \
                     $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, NOW()) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, tagline = EXCLUDED.tagline, phone = EXCLUDED.phone, \
                 email = EXCLUDED.email, address = EXCLUDED.address, \
                 monday_open = EXCLUDED.monday_open, monday_close = EXCLUDED.monday_close, \
                 tuesday_open = EXCLUDED.tuesday_open, tuesday_close = EXCLUDED.tuesday_close, \
                 wednesday_open = EXCLUDED.wednesday_open, wednesday_close = EXCLUDED.wednesday_close, \
                 thursday_open = EXCLUDED.thursday_open, thursday_close = EXCLUDED.thursday_close, \
                 friday_open = EXCLUDED.friday_open, friday_close = EXCLUDED.friday_close, \
                 saturday_open = EXCLUDED.saturday_open, saturday_close = EXCLUDED.saturday_close, \
                 sunday_open = EXCLUDED.sunday_open, sunday_close = EXCLUDED.sunday_close, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}",
            insert_columns = COLUMNS,
        );

        let mut query = sqlx::query_as::<_, BusinessInfo>(&sql)
            .bind(&input.name)
            .bind(&input.tagline)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address);
        for (_, day) in input.hours.iter() {
            query = query
                .bind(non_empty(&day.open))
                .bind(non_empty(&day.close));
        }

        let row = query.fetch_one(self.pool).await?;
        tracing::info!("Business info updated");
        Ok(row)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
