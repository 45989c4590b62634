//! Save history persistence
//!
//! Features:
//! - Append-only history of save records
//! - JSON file layout `{"games": [...]}`, unknown top-level keys preserved
//! - Whole-file read-modify-write on every append
//! - Failed writes are kept in memory and retried by an explicit flush
//!
//! Read and write failures are never fatal for a running session: callers
//! log them and keep going with the in-memory state.

pub mod json_store;
pub mod memory;
pub mod record;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{DATE_FORMAT, SaveFile, SaveRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed save file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode save file: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("save store is read-only")]
    ReadOnly,
}

/// Durable store for the save history
pub trait SaveStore {
    /// Re-read the full history, replacing whatever was cached in memory
    fn load_history(&mut self) -> Result<&[SaveRecord], PersistError>;

    /// Most recent record, if the history has any
    fn last_record(&mut self) -> Result<Option<SaveRecord>, PersistError> {
        Ok(self.load_history()?.last().cloned())
    }

    /// Append one record and write the history out
    fn append(&mut self, record: SaveRecord) -> Result<(), PersistError>;

    /// Write any records a previous append failed to persist
    fn flush(&mut self) -> Result<(), PersistError>;
}
