//! In-memory save store
//!
//! Used when disk persistence is disabled in settings, and by tests.

use super::record::SaveRecord;
use super::{PersistError, SaveStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    history: Vec<SaveRecord>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: Vec<SaveRecord>) -> Self {
        Self {
            history,
            read_only: false,
        }
    }

    /// Store whose appends always fail, for exercising write-failure paths
    pub fn read_only(history: Vec<SaveRecord>) -> Self {
        Self {
            history,
            read_only: true,
        }
    }

    pub fn records(&self) -> &[SaveRecord] {
        &self.history
    }
}

impl SaveStore for MemoryStore {
    fn load_history(&mut self) -> Result<&[SaveRecord], PersistError> {
        Ok(&self.history)
    }

    fn append(&mut self, record: SaveRecord) -> Result<(), PersistError> {
        if self.read_only {
            return Err(PersistError::ReadOnly);
        }
        self.history.push(record);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PersistError> {
        Ok(())
    }
}
