use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("user with this email already exists")]
    Conflict,
    #[error("invalid email or password")]
    Unauthorized,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

/// Coarse classification surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Auth,
    Internal,
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Conflict => 1002,
            AuthError::Unauthorized => 1004,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::Validation,
            AuthError::Conflict => ErrorKind::Conflict,
            AuthError::Unauthorized => ErrorKind::Auth,
            AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_) => ErrorKind::Internal,
        }
    }
}

impl From<models::errors::ModelError> for AuthError {
    fn from(e: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match e {
            ModelError::UniqueViolation(_) => AuthError::Conflict,
            ModelError::Validation(msg) => AuthError::Validation(msg),
            ModelError::Db(msg) => AuthError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err: AuthError = ModelError::UniqueViolation("user_email_key".into()).into();
        assert!(matches!(err, AuthError::Conflict));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn infra_failures_are_internal() {
        for err in [
            AuthError::HashError("x".into()),
            AuthError::TokenError("x".into()),
            AuthError::Repository("x".into()),
        ] {
            assert_eq!(err.kind(), ErrorKind::Internal);
        }
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            AuthError::Validation(String::new()).code(),
            AuthError::Conflict.code(),
            AuthError::Unauthorized.code(),
            AuthError::HashError(String::new()).code(),
            AuthError::TokenError(String::new()).code(),
            AuthError::Repository(String::new()).code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }
}
