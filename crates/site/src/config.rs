//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HEARTH_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `HEARTH_BASE_URL` - Public URL for the site
//! - `HEARTH_ADMIN_USERNAME` - Shared admin login name
//! - `HEARTH_ADMIN_PASSWORD_HASH` - Argon2 PHC hash of the shared admin password
//!   (generate with `hearth-cli admin hash-password`)
//!
//! ## Optional
//! - `HEARTH_HOST` - Bind address (default: 127.0.0.1)
//! - `HEARTH_PORT` - Listen port (default: 3000)
//! - `HEARTH_UPLOAD_DIR` - Where uploaded media is written (default: uploads)
//! - `HEARTH_MEDIA_BASE_URL` - Public URL prefix for uploads (default: `{base_url}/uploads`)
//! - `HEARTH_MAX_UPLOAD_BYTES` - Upload size cap (default: 10485760)
//! - `HEARTH_LOG_JSON` - Emit JSON logs when set
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use argon2::password_hash::PasswordHash;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site, without trailing slash
    pub base_url: String,
    /// Shared admin credential
    pub admin: AdminCredentials,
    /// Media upload settings
    pub media: MediaConfig,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// The single admin login.
///
/// Implements `Debug` manually to redact the password hash.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Login name
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Where uploads go and how they are addressed.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory uploaded files are written to (also served at `/uploads`)
    pub upload_dir: PathBuf,
    /// Public URL prefix for uploaded files, without trailing slash
    pub public_base_url: String,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid, or
    /// if the admin password hash is not a valid PHC string.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Vars(&var);

        let database_url = vars
            .get("HEARTH_DATABASE_URL")
            .or_else(|| vars.get("DATABASE_URL"))
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("HEARTH_DATABASE_URL".to_string()))?;
        let host = vars.parsed("HEARTH_HOST", "127.0.0.1".parse::<IpAddr>())?;
        let port = vars.parsed("HEARTH_PORT", Ok::<u16, std::num::ParseIntError>(3000))?;
        let base_url = normalize_base_url(&vars.required("HEARTH_BASE_URL")?)?;

        let admin = AdminCredentials {
            username: vars.required("HEARTH_ADMIN_USERNAME")?.trim().to_string(),
            password_hash: SecretString::from(vars.required("HEARTH_ADMIN_PASSWORD_HASH")?),
        };
        validate_admin_credentials(&admin)?;

        let media = MediaConfig {
            upload_dir: PathBuf::from(vars.or_default("HEARTH_UPLOAD_DIR", "uploads")),
            public_base_url: vars.get("HEARTH_MEDIA_BASE_URL").map_or_else(
                || format!("{base_url}/uploads"),
                |url| url.trim_end_matches('/').to_string(),
            ),
            max_upload_bytes: vars.parsed(
                "HEARTH_MAX_UPLOAD_BYTES",
                Ok::<usize, std::num::ParseIntError>(DEFAULT_MAX_UPLOAD_BYTES),
            )?,
        };

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            admin,
            media,
            log_json: vars.get("HEARTH_LOG_JSON").is_some(),
            sentry_dsn: vars.get("SENTRY_DSN"),
            sentry_environment: vars.get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: vars.parsed("SENTRY_SAMPLE_RATE", Ok::<f32, std::num::ParseFloatError>(1.0))?,
            sentry_traces_sample_rate: vars.parsed(
                "SENTRY_TRACES_SAMPLE_RATE",
                Ok::<f32, std::num::ParseFloatError>(0.1),
            )?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the error mapping every field shares.
struct Vars<'a, F: Fn(&str) -> Option<String>>(&'a F);

impl<F: Fn(&str) -> Option<String>> Vars<'_, F> {
    /// Get an optional variable; blank values count as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a required variable.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, using `default` when it is unset.
    fn parsed<T, E>(&self, key: &str, default: Result<T, E>) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
        E: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
            None => default.map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        }
    }
}

/// Validate the base URL and strip any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar("HEARTH_BASE_URL".to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            "HEARTH_BASE_URL".to_string(),
            "must be an http(s) URL with a host".to_string(),
        ));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Validate the admin login name and that the password hash is a PHC string.
fn validate_admin_credentials(admin: &AdminCredentials) -> Result<(), ConfigError> {
    if admin.username.is_empty() {
        return Err(ConfigError::MissingEnvVar(
            "HEARTH_ADMIN_USERNAME".to_string(),
        ));
    }

    let hash = admin.password_hash.expose_secret();
    if PasswordHash::new(hash).is_err() {
        return Err(ConfigError::InsecureSecret(
            "HEARTH_ADMIN_PASSWORD_HASH".to_string(),
            "must be an argon2 PHC string, not a plaintext password".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    // argon2id hash of "correct horse battery staple"
    const TEST_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHRzYWx0$J1ZbHcZ4GY6hrxQn+ZAD2EM0fnq6Cyi8TdUk6n9rWu4";

    fn load(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        SiteConfig::from_vars(|key| vars.get(key).cloned())
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("HEARTH_DATABASE_URL", "postgres://localhost/hearth"),
            ("HEARTH_BASE_URL", "https://hearth.test/"),
            ("HEARTH_ADMIN_USERNAME", "owner"),
            ("HEARTH_ADMIN_PASSWORD_HASH", TEST_HASH),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = load(&required()).unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "https://hearth.test");
        assert_eq!(config.media.public_base_url, "https://hearth.test/uploads");
        assert_eq!(config.media.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.media.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(config.is_https());
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_database_url_fallback() {
        let mut vars = required();
        vars.retain(|(k, _)| *k != "HEARTH_DATABASE_URL");
        vars.push(("DATABASE_URL", "postgres://fly/hearth"));

        let config = load(&vars).unwrap();
        assert_eq!(config.database_url.expose_secret(), "postgres://fly/hearth");
    }

    #[test]
    fn test_missing_required() {
        let mut vars = required();
        vars.retain(|(k, _)| *k != "HEARTH_ADMIN_USERNAME");

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == "HEARTH_ADMIN_USERNAME"));
    }

    #[test]
    fn test_plaintext_password_rejected() {
        let mut vars = required();
        vars.retain(|(k, _)| *k != "HEARTH_ADMIN_PASSWORD_HASH");
        vars.push(("HEARTH_ADMIN_PASSWORD_HASH", "hunter2"));

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = required();
        vars.push(("HEARTH_PORT", "eighty"));

        let err = load(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "HEARTH_PORT"));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut vars = required();
        vars.retain(|(k, _)| *k != "HEARTH_BASE_URL");
        vars.push(("HEARTH_BASE_URL", "hearth.test"));

        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_media_base_url_override() {
        let mut vars = required();
        vars.push(("HEARTH_MEDIA_BASE_URL", "https://cdn.hearth.test/media/"));

        let config = load(&vars).unwrap();
        assert_eq!(config.media.public_base_url, "https://cdn.hearth.test/media");
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let config = load(&required()).unwrap();
        let debug_output = format!("{:?}", config.admin);

        assert!(debug_output.contains("owner"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("argon2id"));
    }
}
