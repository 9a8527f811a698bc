use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Creates and returns a SQLite connection pool, creating the database file if absent.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}
