//! Database operations for site content.
//!
//! ## Tables
//!
//! - `business_info` - Singleton row (`id = 1`) with contact details and hours
//! - `categories` - Menu sections
//! - `menu_items` - Dishes, cascade-deleted with their category
//! - `photos` - Gallery entries
//! - `gift_shop_items` - Merchandise
//! - `settings` - Key/value site settings (JSONB)
//! - `tower_sessions.session` - Admin session storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p hearth-cli -- migrate
//! ```

pub mod business_info;
pub mod categories;
pub mod gift_shop;
pub mod menu_items;
pub mod photos;
pub mod settings;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use business_info::BusinessInfoRepository;
pub use categories::CategoryRepository;
pub use gift_shop::GiftShopRepository;
pub use menu_items::MenuItemRepository;
pub use photos::PhotoRepository;
pub use settings::SettingsRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unknown category for a menu item).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map foreign-key violations to `Conflict`, everything else to `Database`.
    fn from_write(err: sqlx::Error, what: &str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Self::Conflict(format!("{what} references a row that does not exist"))
            }
            _ => Self::Database(err),
        }
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
