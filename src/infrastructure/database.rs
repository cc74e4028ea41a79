//! SQLite connection pool setup.

use crate::domain::repositories::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a pool for the given sqlx SQLite URL, creating the database file if missing.
///
/// In-memory databases live only as long as their connection, so they get a single
/// connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    tracing::info!("Initializing SQLite pool: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(StoreError::Connection)?
        .create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options
        .connect_with(options)
        .await
        .map_err(StoreError::Connection)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
