//! Argon2 password hashing.
//!
//! Hashes are stored in PHC string format, so the salt and parameters travel with the hash
//! and verification needs nothing but the stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{auth::AuthError, AppError};

/// Hashes a plain-text password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted argon2 hash
/// - `Err(AppError::AuthErr(AuthError::PasswordHash))` - Hasher failure
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a plain-text password against a stored hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password doesn't match
/// - `Err(AppError::AuthErr(AuthError::PasswordHash))` - Stored hash couldn't be parsed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
