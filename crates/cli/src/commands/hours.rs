//! Print the opening-hours rows exactly as the public pages render them.

use hearth_core::hours::schedule_lines;
use hearth_site::db::{BusinessInfoRepository, RepositoryError};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use thiserror::Error;

use super::{DatabaseUrlError, database_url};

#[derive(Debug, Error)]
pub enum HoursError {
    #[error(transparent)]
    Config(#[from] DatabaseUrlError),

    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to load hours: {0}")]
    Repository(#[from] RepositoryError),
}

/// Print one line per schedule row.
///
/// With `use_default` the database is not contacted.
#[allow(clippy::print_stdout)]
pub async fn print(use_default: bool) -> Result<(), HoursError> {
    let hours = if use_default {
        None
    } else {
        let pool = PgPool::connect(database_url()?.expose_secret()).await?;
        let hours = BusinessInfoRepository::new(&pool).hours().await?;
        if hours.is_none() {
            tracing::warn!("No business info saved yet, showing the default schedule");
        }
        hours
    };

    for line in schedule_lines(hours.as_ref()) {
        println!("{line}");
    }
    Ok(())
}
