//! Application state for cafe-api

use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use crate::config::Config;
use crate::db;
use crate::error::DbResult;

/// Shared application state
///
/// Built once at process start and handed to the router explicitly.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Connect to the database and make sure the schema exists
    pub async fn new(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = db::connect(&config.database_url, config.max_connections).await?;
        db::schema::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Check out a connection for the current request
    ///
    /// The connection goes back to the pool when dropped.
    pub async fn acquire(&self) -> DbResult<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
