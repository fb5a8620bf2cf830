//! Media upload route.

use axum::extract::{Multipart, State};
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::instrument;

use super::api::{ApiResponse, ApiResult};
use crate::error::{AppError, add_breadcrumb};
use crate::middleware::RequireAdmin;
use crate::services::media::{MediaError, MediaStore};
use crate::state::AppState;

/// Multipart field holding the upload.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// `POST /api/admin/upload`
///
/// Accepts one image in the multipart field `file` and returns its public URL.
#[instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    mut multipart: Multipart,
) -> ApiResult<UploadResponse> {
    let store = state.media();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e, store))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(&e, store))?;

        let stored = store.save(&file_name, &bytes).await?;
        add_breadcrumb("media", "File uploaded");
        return Ok(ApiResponse::ok(UploadResponse { url: stored.url }));
    }

    Err(MediaError::MissingFile.into())
}

fn multipart_error(err: &MultipartError, store: &MediaStore) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MediaError::TooLarge {
            limit: store.max_bytes(),
        }
        .into()
    } else {
        AppError::BadRequest(err.body_text())
    }
}
