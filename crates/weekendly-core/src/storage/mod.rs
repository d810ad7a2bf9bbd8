//! Durable key-value slots.
//!
//! Planner state is saved as JSON text under a handful of string keys. The
//! [`Storage`] trait is that contract; [`SqliteStorage`] keeps the slots in
//! a single-table SQLite database and [`MemoryStorage`] keeps them in a map,
//! which is what tests use.

use std::{collections::HashMap, path::Path};

use rusqlite::Connection;

use crate::error::{Result, StorageResultExt};

mod schema;
mod slot_queries;

/// A durable string-to-string store.
pub trait Storage: Send {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`; deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// SQLite-backed slots in the `local_storage` table.
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;

        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// An in-memory SQLite database, gone when dropped.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .storage_context("Failed to open in-memory database")?;

        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.read_slot(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.write_slot(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.delete_slot(key)
    }
}

/// Slots kept in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates one slot.
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
