use std::sync::Arc;

use service::auth::{repository::UserRepository, AuthConfig, AuthService};

/// Shared handler state. Cheap to clone; holds no mutable data.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn UserRepository>, cfg: AuthConfig) -> Self {
        Self { auth: Arc::new(AuthService::new(repo, cfg)) }
    }
}

/// Translate loaded settings into the service's auth config.
pub fn auth_config(settings: &configs::AuthSettings) -> AuthConfig {
    AuthConfig {
        jwt_secret: settings.jwt_secret.clone(),
        token_ttl: chrono::Duration::hours(settings.token_ttl_hours),
    }
}
