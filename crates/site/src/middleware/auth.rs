//! Authentication extractor for admin routes.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::CurrentAdmin;
use crate::models::session::keys;

/// Extractor that requires an admin session.
///
/// Rejects with a 401 JSON envelope when no admin is logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAdmin(admin): RequireAdmin) -> impl IntoResponse {
///     format!("Hello, {}!", admin.username)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))?;

        current_admin(session)
            .await
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))
    }
}

/// The admin stored in the session, if any.
///
/// Session store failures read as logged out.
pub async fn current_admin(session: &Session) -> Option<CurrentAdmin> {
    session
        .get::<CurrentAdmin>(keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}

/// Store the admin in the session, rotating the session ID first.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(keys::CURRENT_ADMIN, admin).await
}

/// Clear the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
