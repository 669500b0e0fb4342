//! redb-based local store, JSON-encoded values
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `settings` | `"appSettings"` | `AppSettings` | Terminal configuration |
//! | `completed_orders` | `u64` | `CompletedOrderRecord` | Sales log (append-only) |
//! | `counters` | `"record_seq"` | `u64` | Completed-order sequence |
//!
//! redb commits with `Durability::Immediate` by default, so a record is
//! persistent as soon as `commit()` returns. Write failures are surfaced as
//! `StorageError` and treated as non-fatal by callers: the in-memory state
//! stays authoritative and the failure is reported once.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::order::CompletedOrderRecord;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::config::AppSettings;

/// Table for settings: key = settings record name, value = JSON-serialized AppSettings
const SETTINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");

/// Table for the sales log: key = sequence, value = JSON-serialized CompletedOrderRecord
const COMPLETED_ORDERS_TABLE: TableDefinition<u64, &[u8]> =
    TableDefinition::new("completed_orders");

/// Table for counters: key = counter name, value = u64
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const SETTINGS_KEY: &str = "appSettings";
const RECORD_SEQ_KEY: &str = "record_seq";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Local terminal store backed by redb
#[derive(Clone)]
pub struct PosStorage {
    db: Arc<Database>,
}

impl PosStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::initialize(db)
    }

    /// Open an in-memory database (tests, demos)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::initialize(db)
    }

    fn initialize(db: Database) -> StorageResult<Self> {
        // Create all tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
            let _ = write_txn.open_table(COMPLETED_ORDERS_TABLE)?;

            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            if counters.get(RECORD_SEQ_KEY)?.is_none() {
                counters.insert(RECORD_SEQ_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Settings ==========

    /// Load the persisted settings record, if any
    ///
    /// Returns `Ok(None)` when no record has been saved yet. A malformed
    /// record surfaces as `StorageError::Serialization`; callers fall back
    /// to defaults.
    pub fn load_settings(&self) -> StorageResult<Option<AppSettings>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;
        match table.get(SETTINGS_KEY)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Persist the settings record
    pub fn save_settings(&self, settings: &AppSettings) -> StorageResult<()> {
        let bytes = serde_json::to_vec(settings)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.insert(SETTINGS_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Completed orders ==========

    /// Append a completed-order record to the sales log
    ///
    /// Returns the sequence number assigned to the record.
    pub fn append_completed_order(&self, record: &CompletedOrderRecord) -> StorageResult<u64> {
        let bytes = serde_json::to_vec(record)?;
        let write_txn = self.db.begin_write()?;
        let seq = {
            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            let next = counters.get(RECORD_SEQ_KEY)?.map(|g| g.value()).unwrap_or(0) + 1;
            counters.insert(RECORD_SEQ_KEY, next)?;

            let mut table = write_txn.open_table(COMPLETED_ORDERS_TABLE)?;
            table.insert(next, bytes.as_slice())?;
            next
        };
        write_txn.commit()?;
        Ok(seq)
    }

    /// Read the full sales log in sequence order
    pub fn completed_orders(&self) -> StorageResult<Vec<CompletedOrderRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COMPLETED_ORDERS_TABLE)?;
        let mut records = Vec::new();
        for item in table.range::<u64>(..)? {
            let (_, value) = item?;
            records.push(serde_json::from_slice(value.value())?);
        }
        Ok(records)
    }
}
