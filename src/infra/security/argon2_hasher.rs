use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use rand::rngs::OsRng;

use crate::domain::ports::CredentialHasher;
use crate::error::AppError;

/// Argon2id with a per-password random salt, PHC string output.
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::PasswordHash;
    use argon2::PasswordVerifier;

    #[test]
    fn test_hash_is_verifiable_and_salted() {
        let hasher = Argon2Hasher;
        let a = hasher.hash("securepassword").unwrap();
        let b = hasher.hash("securepassword").unwrap();

        assert_ne!(a, b, "salts must differ per call");

        let parsed = PasswordHash::new(&a).unwrap();
        assert!(Argon2::default()
            .verify_password(b"securepassword", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrongpassword", &parsed)
            .is_err());
    }
}
