use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration input
#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login input
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Record handed to the repository; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Persisted user as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Client-facing view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<StoredUser> for PublicUser {
    fn from(u: StoredUser) -> Self {
        Self { id: u.id, name: u.name, email: u.email }
    }
}

impl From<models::user::Model> for StoredUser {
    fn from(m: models::user::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, password_hash: m.password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_password() {
        let input = RegisterInput { name: "Ana".into(), email: "ana@x.com".into(), password: "secret1".into() };
        let out = format!("{input:?}");
        assert!(out.contains("ana@x.com"));
        assert!(!out.contains("secret1"));

        let login = LoginInput { email: "ana@x.com".into(), password: "secret1".into() };
        assert!(!format!("{login:?}").contains("secret1"));
    }

    #[test]
    fn public_user_drops_hash() {
        let stored = StoredUser {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            password_hash: "$argon2id$v=19$...".into(),
        };
        let public = PublicUser::from(stored.clone());
        assert_eq!(public.id, stored.id);
        assert_eq!(public.email, stored.email);
    }
}
