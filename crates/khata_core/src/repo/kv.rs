//! Key-value store contract and implementations.
//!
//! # Responsibility
//! - Provide the injected persistence port for ledger snapshots.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `put` replaces the whole value for a key atomically.
//! - Implementations never interpret the stored values.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for key-value persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The connection was opened without the bootstrap/migration path.
    MissingKvTable,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingKvTable => write!(f, "connection has no kv table; run migrations first"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingKvTable => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Injected persistence port: string keys, string values.
pub trait KvStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> RepoResult<()>;
    fn remove(&mut self, key: &str) -> RepoResult<()>;
}

/// SQLite-backed key-value store over the migrated `kv` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Wraps a migrated connection, verifying the `kv` table exists.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        let table_count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv';",
            [],
            |row| row.get(0),
        )?;
        if table_count == 0 {
            return Err(RepoError::MissingKvTable);
        }
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", params![key])?;
        Ok(())
    }
}

/// In-memory key-value store for tests and non-persistent sessions.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> RepoResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
