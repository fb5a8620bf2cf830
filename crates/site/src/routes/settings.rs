//! Site settings routes.

use axum::extract::State;
use serde_json::{Map, Value};
use tracing::instrument;

use super::api::{ApiJson, ApiPath, ApiResponse, ApiResult};
use crate::db::SettingsRepository;
use crate::error::add_breadcrumb;
use crate::middleware::RequireAdmin;
use crate::models::Setting;
use crate::models::setting::validate_key;
use crate::state::AppState;

/// `GET /api/settings`
///
/// All settings as one object, e.g. `{ "hero.title": "Welcome" }`.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> ApiResult<Map<String, Value>> {
    let settings = SettingsRepository::new(state.pool()).all().await?;
    Ok(ApiResponse::ok(settings))
}

/// `PUT /api/admin/settings/{key}`
///
/// The request body is the raw JSON value to store.
#[instrument(skip_all, fields(key = %key))]
pub async fn set(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(key): ApiPath<String>,
    ApiJson(value): ApiJson<Value>,
) -> ApiResult<Setting> {
    validate_key(&key)?;
    let setting = SettingsRepository::new(state.pool())
        .set(&key, &value)
        .await?;

    add_breadcrumb("settings", "Setting updated");
    tracing::info!("Setting updated");
    Ok(ApiResponse::ok(setting))
}

/// `DELETE /api/admin/settings/{key}`
#[instrument(skip_all, fields(key = %key))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    ApiPath(key): ApiPath<String>,
) -> ApiResult<()> {
    validate_key(&key)?;
    SettingsRepository::new(state.pool()).delete(&key).await?;

    add_breadcrumb("settings", "Setting deleted");
    Ok(ApiResponse::ok(()))
}
