use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use std::time::Duration;


/// Fresh in-memory SQLite database with migrations applied.
/// The pool is capped at one connection so every handle sees the same
/// in-memory database.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = crate::db::DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout: Duration::from_secs(5),
        idle_timeout: Duration::from_secs(60),
        acquire_timeout: Duration::from_secs(5),
        sqlx_logging: false,
    };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
