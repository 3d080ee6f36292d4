//! Argon2 password hashing.

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use async_trait::async_trait;
use rand::rngs::OsRng;

use super::errors::AuthError;

/// Hash `plain` with a fresh random salt; returns a PHC string.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unparseable.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}

/// Run [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(plain: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))?
}

/// Run [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(plain: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify_password(&plain, &hash))
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))?
}

/// Argon2id hash with default parameters that no password matches.
/// Login verifies against it when the email is unknown.
pub const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHR2YWx1ZQ$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Hashing seam used by `AuthService`.
#[async_trait]
pub trait PasswordScheme: Send + Sync {
    async fn hash(&self, plain: String) -> Result<String, AuthError>;
    async fn verify(&self, plain: String, hash: String) -> Result<bool, AuthError>;
}

/// Argon2 with default parameters, run on the blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Scheme;

#[async_trait]
impl PasswordScheme for Argon2Scheme {
    async fn hash(&self, plain: String) -> Result<String, AuthError> {
        hash_password_blocking(plain).await
    }

    async fn verify(&self, plain: String, hash: String) -> Result<bool, AuthError> {
        verify_password_blocking(plain, hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
        assert!(!a.contains("secret1"));
        assert!(verify_password("secret1", &a).unwrap());
        assert!(verify_password("secret1", &b).unwrap());
        assert!(!verify_password("wrong", &a).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(matches!(verify_password("secret1", "not-a-phc-string"), Err(AuthError::HashError(_))));
    }

    #[test]
    fn dummy_hash_parses_and_matches_nothing() {
        let parsed = PasswordHash::new(DUMMY_HASH).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(!verify_password("secret1", DUMMY_HASH).unwrap());
        assert!(!verify_password("", DUMMY_HASH).unwrap());
    }

    #[tokio::test]
    async fn argon2_scheme_round_trip() {
        let h = Argon2Scheme.hash("secret1".into()).await.unwrap();
        assert!(Argon2Scheme.verify("secret1".into(), h.clone()).await.unwrap());
        assert!(!Argon2Scheme.verify("secret2".into(), h).await.unwrap());
    }

    #[tokio::test]
    async fn blocking_wrappers_agree() {
        let h = hash_password_blocking("secret1".into()).await.unwrap();
        assert!(verify_password_blocking("secret1".into(), h.clone()).await.unwrap());
        assert!(!verify_password_blocking("nope".into(), h).await.unwrap());
    }
}
