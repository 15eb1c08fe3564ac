use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::error::AppError;

/// Open a connection pool for `database_url`. Does not run migrations.
///
/// An in-memory SQLite database lives only as long as its connection, so
/// it is pinned to a single pooled connection.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(database_url.to_owned());
    opts.connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if is_sqlite_memory(database_url) {
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    tracing::info!(backend = ?conn.get_database_backend(), "database connected");
    Ok(conn)
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}
