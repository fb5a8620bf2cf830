//! Key/value site settings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ValidationError;

/// Longest accepted setting key.
pub const MAX_KEY_LENGTH: usize = 64;

/// A single setting row. Values are arbitrary JSON.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Check a setting key against `[a-z0-9_.-]{1,64}`.
///
/// # Errors
///
/// Returns `ValidationError` if the key is empty, too long, or contains other
/// characters.
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    let valid = !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && key
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-'));

    if valid {
        Ok(())
    } else {
        Err(ValidationError(format!(
            "setting key must match [a-z0-9_.-]{{1,{MAX_KEY_LENGTH}}}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("hero.title").is_ok());
        assert!(validate_key("show_gift-shop").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("Hero").is_err());
        assert!(validate_key("a b").is_err());
        assert!(validate_key(&"k".repeat(MAX_KEY_LENGTH)).is_ok());
        assert!(validate_key(&"k".repeat(MAX_KEY_LENGTH + 1)).is_err());
    }
}
