//! Reads and writes of single storage slots.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use crate::error::{Result, StorageResultExt};

const SELECT_SLOT_SQL: &str = "SELECT value FROM local_storage WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_SLOT_SQL: &str = "DELETE FROM local_storage WHERE key = ?1";

impl super::SqliteStorage {
    pub(super) fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read storage slot")
    }

    pub(super) fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now])
            .storage_context("Failed to write storage slot")?;
        Ok(())
    }

    pub(super) fn delete_slot(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SLOT_SQL, params![key])
            .storage_context("Failed to delete storage slot")?;
        Ok(())
    }
}
