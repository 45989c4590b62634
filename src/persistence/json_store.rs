//! JSON file backed save store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::record::{SaveFile, SaveRecord};
use super::{PersistError, SaveStore};

/// Save history kept in a single JSON file
///
/// Every append re-reads the file, adds the record and rewrites the whole
/// file. There is no partial-write recovery; a failed write leaves the
/// record queued in memory until [`SaveStore::flush`] succeeds.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    history: Vec<SaveRecord>,
    unsynced: Vec<SaveRecord>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            history: Vec::new(),
            unsynced: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records waiting for a successful write
    pub fn pending(&self) -> usize {
        self.unsynced.len()
    }

    /// Read the file; a missing file is an empty history
    fn read_file(&self) -> Result<SaveFile, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No save file at {}", self.path.display());
                return Ok(SaveFile::default());
            }
            Err(source) => {
                return Err(PersistError::Io {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };
        serde_json::from_str(&json).map_err(|source| PersistError::Malformed {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn write_file(&self, file: &SaveFile) -> Result<(), PersistError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        file.serialize(&mut ser).map_err(PersistError::Encode)?;

        fs::write(&self.path, buf).map_err(|source| PersistError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Read-modify-write with everything currently queued
    fn write_pending(&mut self) -> Result<(), PersistError> {
        let mut file = match self.read_file() {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Existing save data unreadable, starting a new history: {}", e);
                SaveFile::default()
            }
        };
        file.games.extend(self.unsynced.iter().cloned());
        self.write_file(&file)?;

        log::info!(
            "Saved {} record(s) to {} ({} total)",
            self.unsynced.len(),
            self.path.display(),
            file.games.len()
        );
        self.unsynced.clear();
        self.history = file.games;
        Ok(())
    }
}

impl SaveStore for JsonFileStore {
    fn load_history(&mut self) -> Result<&[SaveRecord], PersistError> {
        let file = self.read_file()?;
        self.history = file.games;
        self.history.extend(self.unsynced.iter().cloned());
        Ok(&self.history)
    }

    fn append(&mut self, record: SaveRecord) -> Result<(), PersistError> {
        self.unsynced.push(record);
        self.write_pending()
    }

    fn flush(&mut self) -> Result<(), PersistError> {
        if self.unsynced.is_empty() {
            return Ok(());
        }
        self.write_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use tempfile::TempDir;

    fn record(x: f32, score: i32) -> SaveRecord {
        SaveRecord::new(Vec2::new(x, 100.0), score, "2024-01-02 03:04:05")
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("sscore.json"));
        assert!(store.load_history().unwrap().is_empty());
        assert_eq!(store.last_record().unwrap(), None);
    }

    #[test]
    fn test_append_then_last() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("sscore.json"));
        store.append(record(1.0, 4)).unwrap();
        store.append(record(2.0, 7)).unwrap();

        // Fresh store reads what the first one wrote
        let mut reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.load_history().unwrap().len(), 2);
        assert_eq!(reopened.last_record().unwrap(), Some(record(2.0, 7)));
    }

    #[test]
    fn test_append_preserves_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sscore.json");
        fs::write(&path, r#"{"games": [], "owner": "pilot"}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        store.append(record(1.0, 1)).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["owner"], "pilot");
        assert_eq!(raw["games"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_file_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sscore.json");
        let mut store = JsonFileStore::new(&path);
        store.append(record(1.0, 1)).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \"games\""));
    }

    #[test]
    fn test_malformed_file_is_error_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sscore.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load_history(),
            Err(PersistError::Malformed { .. })
        ));
    }

    #[test]
    fn test_failed_write_is_queued_for_flush() {
        let dir = TempDir::new().unwrap();
        // A directory can't be written as a file
        let path = dir.path().join("blocked");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(store.append(record(1.0, 1)).is_err());
        assert_eq!(store.pending(), 1);
        assert!(store.flush().is_err());
        assert_eq!(store.pending(), 1);

        fs::remove_dir(&path).unwrap();
        store.flush().unwrap();
        assert_eq!(store.pending(), 0);
        assert_eq!(store.last_record().unwrap(), Some(record(1.0, 1)));
    }

    #[test]
    fn test_flush_without_pending_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sscore.json");
        let mut store = JsonFileStore::new(&path);
        store.flush().unwrap();
        assert!(!path.exists());

        store.append(record(1.0, 1)).unwrap();
        store.flush().unwrap();
        let mut reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load_history().unwrap().len(), 1);
    }
}
