use async_trait::async_trait;

use super::domain::{NewUser, StoredUser};
use super::errors::AuthError;

/// Repository abstraction for user persistence.
///
/// `create_user` must report a duplicate email as `AuthError::Conflict`
/// even when the caller checked beforehand.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, AuthError>;
    async fn create_user(&self, new_user: NewUser) -> Result<StoredUser, AuthError>;
    async fn list_users(&self) -> Result<Vec<StoredUser>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<Vec<StoredUser>>,
        calls: AtomicUsize,
    }

    impl MockUserRepository {
        /// Number of repository calls made so far.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

        pub async fn len(&self) -> usize { self.users.lock().await.len() }

        pub async fn is_empty(&self) -> bool { self.len().await == 0 }

        fn touch(&self) { self.calls.fetch_add(1, Ordering::SeqCst); }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, AuthError> {
            self.touch();
            let users = self.users.lock().await;
            Ok(users.iter().find(|u| u.email == email).cloned())
        }

        async fn create_user(&self, new_user: NewUser) -> Result<StoredUser, AuthError> {
            self.touch();
            let mut users = self.users.lock().await;
            if users.iter().any(|u| u.email == new_user.email) {
                return Err(AuthError::Conflict);
            }
            let user = StoredUser {
                id: Uuid::new_v4(),
                name: new_user.name,
                email: new_user.email,
                password_hash: new_user.password_hash,
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn list_users(&self) -> Result<Vec<StoredUser>, AuthError> {
            self.touch();
            Ok(self.users.lock().await.clone())
        }
    }
}
