#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig, DATABASE_URL};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    let url = DATABASE_URL.clone()?;
    let mut cfg = DatabaseConfig { url, ..DatabaseConfig::default() };
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    cfg.connect_timeout_secs = 5;
    Some(cfg)
}

/// Connection for database-backed tests, or `None` when no database is
/// configured or reachable (or `SKIP_DB_TESTS` is set).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(None); }
    let Some(cfg) = test_config() else {
        eprintln!("skip: DATABASE_URL not set");
        return Ok(None);
    };

    // Run migrations exactly once, with a throwaway connection
    let migrated = *MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&cfg).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            let ok = migration::Migrator::up(&db, None).await.is_ok();
            let _ = db.close().await;
            ok
        })
        .await;
    if !migrated { return Ok(None); }

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&cfg).await?;
    Ok(Some(db))
}
