//! Password hashing and verification using Argon2id

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::error::DomainError;

/// Hash a password using Argon2id with a random salt.
/// Returns the PHC string suitable for storage in the database.
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut rand::thread_rng());

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored hash.
/// A malformed hash never verifies.
#[allow(dead_code)]
pub fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("mindly123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(&hash, "mindly123"));
    }

    #[test]
    fn test_wrong_password() {
        let hash = hash_password("mindly123").unwrap();
        assert!(!verify_password(&hash, "mindly124"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("not-a-phc-string", "anything"));
    }
}
