//! In-memory SQLite with the real schema.

use envoy_backend::infra::db::connect_db;
use migration::{migrate, MigrationCommand};
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated database private to the calling test.
pub async fn migrated_sqlite() -> DatabaseConnection {
    let db = connect_db("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    migrate(&db, MigrationCommand::Up)
        .await
        .expect("migrations apply cleanly");
    db
}
