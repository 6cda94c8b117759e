use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// A fresh, fully migrated in-memory database.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
