use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::internal::InternalError;

/// Hashes a password with Argon2id and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash string
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Checks a password against a stored hash.
///
/// Returns `false` for malformed hashes, so an account with an unusable hash
/// simply cannot log in.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_hashed_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(!verify_password("anything", "!"));
    }
}
