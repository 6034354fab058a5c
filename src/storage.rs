//! # Storage
//!
//! SQLite-backed storage for todo items: connection lifetime and schema
//! initialization. Row-level operations live in [`crate::repository`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        completed INTEGER DEFAULT 0,
        created_at INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_todos_completed ON todos(completed);
";

/// An open database connection with the schema initialized.
///
/// The connection is held for the duration of one CLI invocation and closed
/// on drop, on every exit path. A failure during open or schema setup
/// surfaces as a storage error and leaves no live handle behind.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (creating if necessary) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// Opens a fresh in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Returns the underlying connection.
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }
}
