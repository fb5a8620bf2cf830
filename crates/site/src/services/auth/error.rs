//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while checking the admin login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
