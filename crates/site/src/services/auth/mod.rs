//! Authentication service.
//!
//! The site has a single shared admin login. The username is compared in
//! constant time and the password is checked against the configured argon2
//! PHC hash.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::ExposeSecret;

use crate::config::AdminCredentials;

/// Authentication service for the admin login.
pub struct AuthService<'a> {
    credentials: &'a AdminCredentials,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(credentials: &'a AdminCredentials) -> Self {
        Self { credentials }
    }

    /// Check a login attempt.
    ///
    /// Returns the canonical username on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if either the username or the
    /// password does not match. The password is verified even when the
    /// username is wrong so both failures take the same time.
    pub fn login(&self, username: &str, password: &str) -> Result<&'a str, AuthError> {
        let username_ok = constant_time_eq(
            username.trim().as_bytes(),
            self.credentials.username.as_bytes(),
        );
        let password_ok =
            verify_password(password, self.credentials.password_hash.expose_secret()).is_ok();

        if username_ok && password_ok {
            Ok(self.credentials.username.as_str())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Hash a password with argon2id and a random salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn credentials(password: &str) -> AdminCredentials {
        AdminCredentials {
            username: "owner".to_string(),
            password_hash: SecretString::from(hash_password(password).unwrap()),
        }
    }

    #[test]
    fn test_hash_is_phc_string() {
        let hash = hash_password("open sesame").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(PasswordHash::new(&hash).is_ok());
    }

    #[test]
    fn test_login_success() {
        let creds = credentials("open sesame");
        let auth = AuthService::new(&creds);

        assert_eq!(auth.login(" owner ", "open sesame").unwrap(), "owner");
    }

    #[test]
    fn test_login_wrong_password() {
        let creds = credentials("open sesame");
        let auth = AuthService::new(&creds);

        assert!(matches!(
            auth.login("owner", "open says me"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_wrong_username() {
        let creds = credentials("open sesame");
        let auth = AuthService::new(&creds);

        assert!(matches!(
            auth.login("chef", "open sesame"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }
}
