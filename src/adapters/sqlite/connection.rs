//! Database connection pool management.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::errors::{DomainError, DomainResult};

use super::migrations::{initial_schema_migration, Migrator};

/// SQLite connection pool with WAL mode enabled for better concurrency.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new connection pool.
    ///
    /// Journal mode WAL, synchronous NORMAL, foreign keys on, 5s busy
    /// timeout. The database file is created when missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> DomainResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DomainError::DatabaseError(format!("Invalid database URL: {e}")))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| DomainError::DatabaseError(format!("Failed to create pool: {e}")))?;

        Ok(Self { pool })
    }

    /// Run embedded migrations. Safe to call repeatedly.
    pub async fn migrate(&self) -> DomainResult<()> {
        Migrator::new(self.pool.clone())
            .run_embedded_migrations(vec![initial_schema_migration()])
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool gracefully during shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
