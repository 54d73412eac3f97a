//! SQLite storage for tweets and the read-only user directory.
//!
//! Query functions take a `&mut SqliteConnection` so handlers can run a
//! whole request inside one transaction (`&mut *tx`).

pub mod migrations;
pub mod tweets;
pub mod users;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tracing::info;

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    migrations::run(&pool).await?;

    info!("Database ready at {}", database_url);
    Ok(pool)
}
