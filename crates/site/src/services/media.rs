//! Local media storage for uploaded images.
//!
//! Files are written to the configured upload directory as `{uuid}.{ext}` and
//! served back by the static file service mounted at `/uploads`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::config::MediaConfig;

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Errors that can occur while storing media.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The request had no file part.
    #[error("no file was uploaded")]
    MissingFile,

    /// The file extension is not an accepted image type.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// The file is larger than the configured limit.
    #[error("file exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },

    /// Writing the file failed.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file that has been written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Generated file name (`{uuid}.{ext}`).
    pub file_name: String,
    /// Public URL for the file.
    pub url: String,
}

/// Writes uploads to a local directory.
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl MediaStore {
    /// Create a store from configuration.
    #[must_use]
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            dir: config.upload_dir.clone(),
            public_base_url: config.public_base_url.clone(),
            max_bytes: config.max_upload_bytes,
        }
    }

    /// Directory files are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Largest accepted upload in bytes.
    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Store an upload under a fresh name.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::UnsupportedType` if the original name has no
    /// accepted extension, `MediaError::TooLarge` if `bytes` is over the limit,
    /// and `MediaError::Io` if the file cannot be written.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredMedia, MediaError> {
        let ext = allowed_extension(original_name)?;
        if bytes.len() > self.max_bytes {
            return Err(MediaError::TooLarge {
                limit: self.max_bytes,
            });
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!("{}.{ext}", Uuid::new_v4());
        tokio::fs::write(self.dir.join(&file_name), bytes).await?;

        tracing::info!(file_name = %file_name, size = bytes.len(), "Stored upload");

        Ok(StoredMedia {
            url: self.url_for(&file_name),
            file_name,
        })
    }

    /// Public URL for a stored file name.
    #[must_use]
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.public_base_url)
    }
}

/// Lowercased extension of `name` if it is an accepted image type.
fn allowed_extension(name: &str) -> Result<String, MediaError> {
    let ext = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| MediaError::UnsupportedType(name.to_string()))?;

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(MediaError::UnsupportedType(ext))
    }
}
