//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the `Storage` handle wrapping the shared pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{AdminUser, ContactSubmission, DrawResult};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, Storage};

use crate::error::BoardError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Open the pool, run the bundled DDL and seed the default admin account.
pub async fn connect(database_url: &str) -> Result<Storage, BoardError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(opts).await?;
    let storage = Storage::new(pool);
    storage.init_schema().await?;
    if storage.seed_default_admin().await? {
        info!("default admin user created (username: admin)");
    }
    Ok(storage)
}
