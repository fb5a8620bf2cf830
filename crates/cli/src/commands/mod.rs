pub mod admin;
pub mod hours;
pub mod migrate;

use secrecy::SecretString;

/// Errors shared by commands that talk to the database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseUrlError {
    #[error("Missing environment variable: HEARTH_DATABASE_URL (or DATABASE_URL)")]
    Missing,
}

/// Read the database URL the same way the site does.
pub fn database_url() -> Result<SecretString, DatabaseUrlError> {
    dotenvy::dotenv().ok();

    std::env::var("HEARTH_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| DatabaseUrlError::Missing)
}
