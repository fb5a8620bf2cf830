//! Admin credential helpers.
//!
//! The site has a single admin account configured through the environment, so
//! the only thing to manage here is the password hash.

use hearth_site::services::auth::{self, AuthError};

/// Hash `password` with argon2 and print the PHC string to stdout.
#[allow(clippy::print_stdout)]
pub fn hash_password(password: &str) -> Result<(), AuthError> {
    if password.len() < 12 {
        tracing::warn!("Password is shorter than 12 characters");
    }

    let hash = auth::hash_password(password)?;
    println!("{hash}");
    Ok(())
}
