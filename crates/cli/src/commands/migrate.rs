//! Database migration command.
//!
//! Applies everything under `crates/site/migrations`, including the
//! `tower_sessions` schema used by the admin session store.
//!
//! # Environment Variables
//!
//! - `HEARTH_DATABASE_URL` (falls back to `DATABASE_URL`)

use secrecy::ExposeSecret;
use sqlx::PgPool;
use thiserror::Error;

use super::{DatabaseUrlError, database_url};

/// Errors that can occur during migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] DatabaseUrlError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all pending migrations.
pub async fn run() -> Result<(), MigrationError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
