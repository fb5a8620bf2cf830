//! Gallery photo routes.

use axum::extract::State;
use tracing::instrument;

use hearth_core::PhotoId;

use super::api::{ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::db::PhotoRepository;
use crate::error::add_breadcrumb;
use crate::middleware::RequireAdmin;
use crate::models::{Photo, PhotoInput, PhotoUpdate};
use crate::state::AppState;

/// `GET /api/photos`
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Photo>> {
    let photos = PhotoRepository::new(state.pool()).list().await?;
    Ok(ApiResponse::ok(photos))
}

/// `POST /api/admin/photos`
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiJson(input): ApiJson<PhotoInput>,
) -> ApiResult<Photo> {
    let input = input.normalize()?;
    let photo = PhotoRepository::new(state.pool()).create(&input).await?;

    add_breadcrumb("content", "Photo added");
    tracing::info!(photo_id = %photo.id, "Photo added");
    Ok(ApiResponse::ok(photo))
}

/// `PUT /api/admin/photos/{id}`
#[instrument(skip_all, fields(photo_id = %id))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<PhotoId>,
    ApiJson(update): ApiJson<PhotoUpdate>,
) -> ApiResult<Photo> {
    let photo = PhotoRepository::new(state.pool())
        .update(id, &update.normalize())
        .await?;

    add_breadcrumb("content", "Photo updated");
    Ok(ApiResponse::ok(photo))
}

/// `DELETE /api/admin/photos/{id}`
///
/// Only the gallery entry is removed; the uploaded file stays in place.
#[instrument(skip_all, fields(photo_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(id): ApiPath<PhotoId>,
) -> ApiResult<()> {
    PhotoRepository::new(state.pool()).delete(id).await?;

    add_breadcrumb("content", "Photo deleted");
    Ok(ApiResponse::ok(()))
}
