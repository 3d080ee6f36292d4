use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::ModelError;

/// Registered account. `password` holds the PHC hash string, never plaintext.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, name: &str, email: &str, password_hash: &str) -> Result<Model, ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    if password_hash.trim().is_empty() { return Err(ModelError::Validation("password hash required".into())); }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Email).all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    async fn db_or_skip() -> Option<DatabaseConnection> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }
        let db = match crate::db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {}", e);
                return None;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {}", e);
            return None;
        }
        Some(db)
    }

    #[tokio::test]
    async fn create_then_find_by_email() -> anyhow::Result<()> {
        let Some(db) = db_or_skip().await else { return Ok(()) };
        let email = format!("model_{}@example.com", Uuid::new_v4());
        let created = create(&db, "Model User", &email, "$argon2id$placeholder").await?;
        let found = find_by_email(&db, &email).await?.expect("user present");
        assert_eq!(found.id, created.id);
        assert_eq!(found.password, "$argon2id$placeholder");
        Entity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_unique_violation() -> anyhow::Result<()> {
        let Some(db) = db_or_skip().await else { return Ok(()) };
        let email = format!("dup_{}@example.com", Uuid::new_v4());
        let first = create(&db, "First", &email, "hash-a").await?;
        let second = create(&db, "Second", &email, "hash-b").await;
        assert!(matches!(second, Err(ModelError::UniqueViolation(_))));
        Entity::delete_by_id(first.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_blank_name() -> anyhow::Result<()> {
        let Some(db) = db_or_skip().await else { return Ok(()) };
        let res = create(&db, "   ", "blank@example.com", "hash").await;
        assert!(matches!(res, Err(ModelError::Validation(_))));
        Ok(())
    }
}
