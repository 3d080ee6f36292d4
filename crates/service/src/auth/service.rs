use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, instrument, warn};

use super::domain::{LoginInput, NewUser, PublicUser, RegisterInput};
use super::errors::AuthError;
use super::password::{Argon2Scheme, PasswordScheme, DUMMY_HASH};
use super::repository::UserRepository;
use super::token::TokenIssuer;
use super::validation::{validate_login, validate_registration};

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Signing secret; login fails with an internal error while unset.
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { jwt_secret: None, token_ttl: Duration::hours(24) }
    }
}

/// Auth business service independent of web framework
pub struct AuthService {
    repo: Arc<dyn UserRepository>,
    tokens: Option<TokenIssuer>,
    passwords: Arc<dyn PasswordScheme>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn UserRepository>, cfg: AuthConfig) -> Self {
        let tokens = cfg.jwt_secret.as_deref().map(|s| TokenIssuer::new(s, cfg.token_ttl));
        if tokens.is_none() {
            warn!("no JWT secret configured; login will fail");
        }
        Self { repo, tokens, passwords: Arc::new(Argon2Scheme) }
    }

    /// Replace the default Argon2 scheme.
    pub fn with_password_scheme(mut self, passwords: Arc<dyn PasswordScheme>) -> Self {
        self.passwords = passwords;
        self
    }

    /// Token issuer in use, if a secret was configured.
    pub fn tokens(&self) -> Option<&TokenIssuer> { self.tokens.as_ref() }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockUserRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::default());
    /// let input = RegisterInput { name: "Ana".into(), email: "ana@x.com".into(), password: "secret1".into() };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "ana@x.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<PublicUser, AuthError> {
        validate_registration(&input)?;

        // advisory only: the unique key on email is the real guard
        if self.repo.find_by_email(&input.email).await?.is_some() {
            debug!("user exists");
            return Err(AuthError::Conflict);
        }

        let RegisterInput { name, email, password } = input;
        let password_hash = self.passwords.hash(password).await?;
        let name = name.trim().to_owned();
        let user = self.repo.create_user(NewUser { name, email, password_hash }).await?;
        info!(user_id = %user.id, email = %user.email, "user_registered");
        Ok(user.into())
    }

    /// Authenticate a user and issue a signed token.
    ///
    /// Unknown email and wrong password both yield `AuthError::Unauthorized`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockUserRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: Some("secret".into()), ..AuthConfig::default() });
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { name: "N".into(), email: "u@e.com".into(), password: "Passw0rd".into() }));
    /// let token = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert!(!token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<String, AuthError> {
        validate_login(&input)?;

        let found = self.repo.find_by_email(&input.email).await?;
        let hash = found.as_ref().map_or(DUMMY_HASH, |u| u.password_hash.as_str()).to_owned();
        let matched = self.passwords.verify(input.password, hash).await?;
        let user = match found {
            Some(user) if matched => user,
            Some(user) => {
                debug!(user_id = %user.id, "password mismatch");
                return Err(AuthError::Unauthorized);
            }
            None => {
                debug!("unknown email");
                return Err(AuthError::Unauthorized);
            }
        };

        let issuer = self
            .tokens
            .as_ref()
            .ok_or_else(|| AuthError::TokenError("signing secret not configured".into()))?;
        let token = issuer.issue(user.id, &user.email)?;
        info!(user_id = %user.id, "user_logged_in");
        Ok(token)
    }

    /// All users, unpaginated.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<PublicUser>, AuthError> {
        let users = self.repo.list_users().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }
}
