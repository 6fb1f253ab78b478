// Password hashing and verification service

use crate::auth::error::AuthError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Password service for hashing and verification
///
/// Hashes use Argon2id with a fresh random salt per call; the PHC output
/// string embeds algorithm parameters and salt, so no separate salt storage
/// is needed.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id with a random salt
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AuthError::PasswordHashError)?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash
    ///
    /// Returns false for a mismatched password and for a malformed stored
    /// hash alike; the caller cannot tell the two apart, and the comparison
    /// itself is argon2's constant-time check.
    pub fn verify_password(password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
