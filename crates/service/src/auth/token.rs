//! JWT issuing and verification (HS256).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;

/// Claims embedded in login tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, email, Utc::now())
    }

    pub fn issue_at(&self, user_id: Uuid, email: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Check signature and expiry. Any failure is reported as `Unauthorized`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(err = %e, "token rejected");
                AuthError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_round_trip_with_24h_expiry() {
        let issuer = TokenIssuer::new("test-secret", Duration::hours(24));
        let uid = Uuid::new_v4();
        let token = issuer.issue(uid, "ana@x.com").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id, uid);
        assert_eq!(claims.email, "ana@x.com");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn payload_uses_camel_case_user_id() {
        let claims = Claims { user_id: Uuid::nil(), email: "a@b.co".into(), iat: 1, exp: 2 };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issuer = TokenIssuer::new("secret-a", Duration::hours(24));
        let other = TokenIssuer::new("secret-b", Duration::hours(24));
        let token = issuer.issue(Uuid::new_v4(), "ana@x.com").unwrap();
        assert!(matches!(other.verify(&token), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("test-secret", Duration::hours(24));
        let issued = Utc::now() - Duration::hours(48);
        let token = issuer.issue_at(Uuid::new_v4(), "ana@x.com", issued).unwrap();
        assert!(matches!(issuer.verify(&token), Err(AuthError::Unauthorized)));
    }
}
