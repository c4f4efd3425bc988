use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod activities_repo;
pub mod schema;
pub mod seed;
pub mod signups_repo;

pub async fn connect(database_url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new().connect_with(options).await
}

/// Private in-memory database. Every connection to `sqlite::memory:` opens a
/// fresh database, so the pool is pinned to one connection that never expires.
pub async fn connect_in_memory() -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Creates missing tables and seeds the catalog when the store is empty.
pub async fn init(pool: &SqlitePool) -> sqlx::Result<seed::SeedReport> {
    schema::create_schema(pool).await?;
    seed::seed_if_empty(pool).await
}
