//! Business-info and opening-hours routes.

use axum::extract::State;
use serde::Serialize;
use sqlx::PgPool;
use tracing::instrument;

use hearth_core::hours::{WeeklyHours, schedule_lines};

use super::api::{ApiJson, ApiResponse, ApiResult};
use crate::db::BusinessInfoRepository;
use crate::error::add_breadcrumb;
use crate::middleware::RequireAdmin;
use crate::models::{BusinessInfo, BusinessInfoInput};
use crate::state::AppState;

/// Rendered opening hours.
#[derive(Debug, Clone, Serialize)]
pub struct HoursDisplay {
    /// One display string per schedule row, Monday first.
    pub rows: Vec<String>,
    /// True when no saved record was available and the default week was used.
    pub is_default: bool,
}

impl HoursDisplay {
    /// Render a week, substituting the default schedule for `None`.
    #[must_use]
    pub fn new(hours: Option<&WeeklyHours>) -> Self {
        Self {
            rows: schedule_lines(hours),
            is_default: hours.is_none(),
        }
    }
}

/// Load the business-info record for display.
///
/// A failed query is logged and reads as "no record", so pages fall back to
/// defaults instead of failing.
pub async fn load_info(pool: &PgPool) -> Option<BusinessInfo> {
    match BusinessInfoRepository::new(pool).get().await {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load business info, using defaults");
            None
        }
    }
}

/// Load and render the weekly hours.
pub async fn load_hours(pool: &PgPool) -> HoursDisplay {
    let info = load_info(pool).await;
    HoursDisplay::new(info.as_ref().map(|info| &info.hours))
}

/// `GET /api/business-info`
///
/// `data` is `null` until the record has been saved once.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> ApiResult<Option<BusinessInfo>> {
    let info = BusinessInfoRepository::new(state.pool()).get().await?;
    Ok(ApiResponse::ok(info))
}

/// `GET /api/business-info/hours`
#[instrument(skip(state))]
pub async fn hours(State(state): State<AppState>) -> ApiResponse<HoursDisplay> {
    ApiResponse::ok(load_hours(state.pool()).await)
}

/// `PUT /api/admin/business-info`
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(input): ApiJson<BusinessInfoInput>,
) -> ApiResult<BusinessInfo> {
    let input = input.normalize()?;
    let info = BusinessInfoRepository::new(state.pool())
        .upsert(&input)
        .await?;

    add_breadcrumb("content", "Business info updated");
    tracing::info!(admin = %admin.username, "Business info saved");
    Ok(ApiResponse::ok(info))
}
