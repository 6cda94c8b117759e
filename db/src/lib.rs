pub mod models;
pub mod test_utils;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use util::{config, paths};

/// Opens the connection pool for `DATABASE_PATH`.
///
/// A plain file path is opened as a SQLite database (created if missing, along with
/// its parent directory); a full DSN is used as-is.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&config::database_path()).await
}

pub async fn connect_to(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = paths::sqlite_url(path_or_url);
    if !paths::is_connection_string(path_or_url) {
        paths::ensure_parent_dir(path_or_url).map_err(|e| {
            DbErr::Custom(format!("failed to create database directory: {e}"))
        })?;
    }

    tracing::info!(%url, "Connecting to database");
    Database::connect(&url).await
}

/// Connects and brings the schema up to date. Safe to call on every startup.
pub async fn connect_and_migrate() -> Result<DatabaseConnection, DbErr> {
    let db = connect().await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
