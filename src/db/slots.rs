//! SQLite-backed implementation of the slot store.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::{SlotStore, StorageUnavailable};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteSlots {
    pool: DbPool,
}

impl SqliteSlots {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Underlying connection, used for the audit log and `db` maintenance.
    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl SlotStore for SqliteSlots {
    fn read(&self, key: &str) -> Result<Option<String>, StorageUnavailable> {
        self.pool
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(|e| StorageUnavailable::new(key, e))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageUnavailable> {
        let now = Local::now().to_rfc3339();

        self.pool
            .conn
            .execute(
                "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map(|_| ())
            .map_err(|e| StorageUnavailable::new(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageUnavailable> {
        self.pool
            .conn
            .execute("DELETE FROM slots WHERE key = ?1", [key])
            .map(|_| ())
            .map_err(|e| StorageUnavailable::new(key, e))
    }
}
