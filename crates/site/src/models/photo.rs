//! Gallery photos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hearth_core::PhotoId;

use super::{ValidationError, optional_text};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Photo {
    pub id: PhotoId,
    pub url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// New gallery entry, usually pointing at a URL returned by the upload route.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoInput {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl PhotoInput {
    /// Trim fields and require a URL.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the URL is blank.
    pub fn normalize(self) -> Result<Self, ValidationError> {
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Err(ValidationError("url is required".to_string()));
        }
        Ok(Self {
            url,
            caption: optional_text(self.caption),
            sort_order: self.sort_order,
        })
    }
}

/// Caption and ordering changes for an existing photo.
///
/// An omitted `sort_order` keeps the current position; `caption` is replaced
/// as given (omit or send `null` to clear it).
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUpdate {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl PhotoUpdate {
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            caption: optional_text(self.caption),
            sort_order: self.sort_order,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_input_requires_url() {
        let input: PhotoInput = serde_json::from_str(r#"{ "url": "  " }"#).unwrap();
        assert!(input.normalize().is_err());
    }

    #[test]
    fn test_photo_update_blank_caption_clears() {
        let update: PhotoUpdate = serde_json::from_str(r#"{ "caption": " " }"#).unwrap();
        let update = update.normalize();

        assert_eq!(update.caption, None);
        assert_eq!(update.sort_order, None);
    }
}
