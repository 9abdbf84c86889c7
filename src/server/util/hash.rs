use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::server::error::Error;

/// Hash a plaintext password into an Argon2 PHC string for storage
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string
///
/// Returns Ok(false) on mismatch; Err only when the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    /// Expect a stored hash to verify against the original password only
    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    /// Expect Err when the stored hash is not a valid PHC string
    #[test]
    fn test_verify_malformed_hash() {
        let result = verify_password("anything", "not-a-phc-string");

        assert!(result.is_err());
    }
}
