//! SQLite backend for the checkout engine.

mod customers;
mod db;
mod orders;

pub use db::SqliteDatabase;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use crate::traits::StoreError;

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect(url).await?;
    Ok(pool)
}
