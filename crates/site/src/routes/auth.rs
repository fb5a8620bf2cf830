//! Admin login and session routes.

use axum::extract::State;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use super::api::{ApiJson, ApiResponse, ApiResult};
use crate::error::{AppError, add_breadcrumb};
use crate::middleware::{clear_current_admin, current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: SecretString,
}

/// Session status returned by login and `GET /api/admin/session`.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl From<Option<CurrentAdmin>> for SessionStatus {
    fn from(admin: Option<CurrentAdmin>) -> Self {
        Self {
            authenticated: admin.is_some(),
            username: admin.map(|a| a.username),
        }
    }
}

/// `POST /api/admin/login`
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<SessionStatus> {
    let username = AuthService::new(&state.config().admin)
        .login(&request.username, request.password.expose_secret())
        .inspect_err(|_| tracing::warn!("Failed admin login attempt"))?;

    let admin = CurrentAdmin {
        username: username.to_string(),
    };
    set_current_admin(&session, &admin)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    add_breadcrumb("auth", "Admin logged in");
    tracing::info!(admin = %admin.username, "Admin logged in");
    Ok(ApiResponse::ok(Some(admin).into()))
}

/// `POST /api/admin/logout`
///
/// Always succeeds; logging out without a session is a no-op.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> ApiResult<SessionStatus> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    add_breadcrumb("auth", "Admin logged out");
    Ok(ApiResponse::ok(SessionStatus::from(None)))
}

/// `GET /api/admin/session`
///
/// Reports whether the caller is logged in rather than rejecting with 401.
#[instrument(skip_all)]
pub async fn status(session: Session) -> ApiResponse<SessionStatus> {
    ApiResponse::ok(current_admin(&session).await.into())
}
