//! SQLite storage for the firearm catalog.
//!
//! Owns the connection pool, the embedded schema migration, the reference
//! data seeder and the read-only [`repositories::FirearmRepo`].

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::SqlitePool;

/// Open (creating the file if missing) a connection pool for `database_url`.
///
/// Accepts any SQLite URL understood by sqlx, e.g. `sqlite://gundatabase.db`
/// or `sqlite::memory:`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the `firearms` table and its indexes exist.
///
/// Every statement is `IF NOT EXISTS`, so this is safe on every startup,
/// including against a database created before migrations were tracked.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
