use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::types::error::AppError;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random secret for accounts that never chose a password.
pub fn new_placeholder_secret() -> String {
    let mut buf = [0u8; 32];
    OsRng.fill_bytes(&mut buf);
    format!("ph_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Argon2 verification compares in constant time.
pub fn verify(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("stored password hash is malformed: {e}")))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hashed = hash("hunter2").unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2", &hashed).unwrap());
        assert!(!verify("hunter3", &hashed).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(hash("p").unwrap(), hash("p").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        assert!(matches!(verify("p", "plaintext"), Err(AppError::Internal(_))));
    }

    #[test]
    fn placeholder_secrets_are_unique() {
        let a = new_placeholder_secret();
        let b = new_placeholder_secret();
        assert!(a.starts_with("ph_"));
        assert_ne!(a, b);
    }
}
