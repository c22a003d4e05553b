//! Connection pool lifecycle and schema bootstrap for the SQLite store.

use crate::error::AppError;
use crate::sql::{BAKED_GOODS, BAKERIES};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;

/// Handle to the relational store. Cheap to clone; all clones share one pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the pool. The database file is created if missing and foreign keys are enforced.
    /// In-memory URLs need `max_connections = 1`, since each connection gets its own database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            // keep in-memory databases alive between requests
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        tracing::info!(url = %database_url, max_connections, "store connected");
        Ok(Store { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create `bakeries` and `baked_goods` if they do not exist.
    pub async fn ensure_tables(&self) -> Result<(), AppError> {
        let bakeries_ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            BAKERIES
        );
        sqlx::query(&bakeries_ddl).execute(&self.pool).await?;

        let baked_goods_ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                bakery_id INTEGER NOT NULL REFERENCES {}(id),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            BAKED_GOODS, BAKERIES
        );
        sqlx::query(&baked_goods_ddl).execute(&self.pool).await?;

        let index = format!(
            "CREATE INDEX IF NOT EXISTS idx_baked_goods_bakery_id ON {} (bakery_id)",
            BAKED_GOODS
        );
        sqlx::query(&index).execute(&self.pool).await?;
        tracing::debug!("schema ensured");
        Ok(())
    }

    /// Scoped transaction for one handler. Dropping it without `commit` rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// Round-trip to the database, used by the readiness check.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    /// Wait for checked-out connections to return, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("store closed");
    }
}
