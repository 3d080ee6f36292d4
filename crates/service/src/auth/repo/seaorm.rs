use sea_orm::DatabaseConnection;

use crate::auth::domain::{NewUser, StoredUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::UserRepository;

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, AuthError> {
        let found = models::user::find_by_email(&self.db, email).await?;
        Ok(found.map(StoredUser::from))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<StoredUser, AuthError> {
        // a unique-key violation here becomes AuthError::Conflict
        let created = models::user::create(&self.db, &new_user.name, &new_user.email, &new_user.password_hash).await?;
        Ok(StoredUser::from(created))
    }

    async fn list_users(&self) -> Result<Vec<StoredUser>, AuthError> {
        let users = models::user::list_all(&self.db).await?;
        Ok(users.into_iter().map(StoredUser::from).collect())
    }
}
