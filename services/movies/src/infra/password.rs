use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::MoviesServiceError;

/// Hash a password into an argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, MoviesServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("hash password: {e}"))?
        .to_string();
    Ok(hash)
}

/// Check `password` against a stored PHC string.
///
/// A stored hash that fails to parse is an internal error, not a mismatch.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, MoviesServiceError> {
    let parsed = PasswordHash::new(stored).map_err(|e| anyhow!("parse password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
