//! SQLite-backed key-value store.
//!
//! The garden is persisted as a handful of string keys in a single `kv`
//! table, mirroring how the mobile app used its async key-value storage.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{data_dir, KvOp, KvStore};
use crate::error::{DatabaseError, Result};

const UPSERT_SQL: &str = "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)";
const DELETE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

/// SQLite database holding the garden key-value pairs.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data dir>/moodbloom.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("moodbloom.db");
        Self::open_at(&path)
    }

    /// Open (or create) a database file at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(UPSERT_SQL, params![key, value])?;
        Ok(())
    }

    /// Delete a value from the kv store.
    pub fn kv_delete(&self, key: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(DELETE_SQL, params![key])?;
        Ok(())
    }

    /// Run a batch of writes in one transaction.
    ///
    /// The transaction rolls back on drop if any statement fails.
    pub fn kv_apply(&self, ops: &[KvOp]) -> Result<(), rusqlite::Error> {
        let tx = self.conn.unchecked_transaction()?;
        for op in ops {
            match op {
                KvOp::Set { key, value } => tx.execute(UPSERT_SQL, params![key, value])?,
                KvOp::Remove { key } => tx.execute(DELETE_SQL, params![key])?,
            };
        }
        tx.commit()
    }
}

impl KvStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.kv_get(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.kv_set(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Ok(self.kv_delete(key)?)
    }

    fn apply(&self, ops: &[KvOp]) -> Result<()> {
        Ok(self.kv_apply(ops)?)
    }
}
