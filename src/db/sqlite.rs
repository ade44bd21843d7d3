//! SQLite-backed storage handle.
//!
//! `Database` wraps an r2d2 connection pool over rusqlite. Handlers receive
//! it as `Arc<Database>` through `AppState` and acquire a connection per
//! operation, never holding one across requests.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to acquire database connection: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// A pooled SQLite connection.
pub type DbConn = PooledConnection<SqliteConnectionManager>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database file and build the connection pool.
    pub fn new(db_path: &str) -> Result<Self, StoreError> {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder().build(manager)?;

        Ok(Self { pool })
    }

    /// Get a connection from the pool.
    pub(crate) fn conn(&self) -> Result<DbConn, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Create the notes table if it does not already exist.
    ///
    /// Idempotent: calling this against an existing table is a no-op and
    /// never touches existing rows. The title length bound lives here as a
    /// CHECK so over-long titles fail the insert itself.
    pub fn init_tables(&self) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) <= 100),
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}
