//! Completed-order reporting seam
//!
//! The finalizer emits each completed-order record to a [`SalesRecorder`].
//! Emission is one-way and best-effort: the workflow never reads records
//! back, and a failed write is logged by the caller without rolling back
//! the completion.

use shared::order::CompletedOrderRecord;

use crate::storage::{PosStorage, StorageError};

/// Reporting collaborator receiving completed-order records
pub trait SalesRecorder: Send + Sync {
    fn record(&self, record: &CompletedOrderRecord) -> Result<(), StorageError>;
}

/// Recorder appending to the persistent sales log
pub struct StorageSalesRecorder {
    storage: PosStorage,
}

impl StorageSalesRecorder {
    pub fn new(storage: PosStorage) -> Self {
        Self { storage }
    }
}

impl SalesRecorder for StorageSalesRecorder {
    fn record(&self, record: &CompletedOrderRecord) -> Result<(), StorageError> {
        let seq = self.storage.append_completed_order(record)?;
        tracing::debug!(
            "Recorded completed order #{} as sales-log entry {}",
            record.order_number,
            seq
        );
        Ok(())
    }
}
