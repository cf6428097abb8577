// SPDX-License-Identifier: MPL-2.0
//! [`KeyValueStorage`] adapters.
//!
//! [`FileStorage`] keeps a string map in `storage.cbor` inside the data
//! directory and rewrites the whole file on every change. [`MemoryStorage`]
//! forgets everything on exit.

use crate::app::paths;
use crate::application::port::KeyValueStorage;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STORAGE_FILE: &str = "storage.cbor";

/// CBOR-backed durable storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage file in the data directory.
    ///
    /// Returns `None` when no data directory can be determined.
    pub fn open_default(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STORAGE_FILE);
            Self::open(path)
        })
    }

    /// Opens `path`, starting empty if it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = if path.exists() {
            read_entries(&path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "discarding unreadable storage");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        Self { path, entries }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(&self.entries, writer).map_err(Error::from)
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(ciborium::from_reader(reader)?)
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            // Memory must keep matching the file, or a retry would be skipped.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

/// Volatile storage, used when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(STORAGE_FILE);

        let mut storage = FileStorage::open(&path);
        storage.set("portfolio-language", "ja").expect("write");

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("portfolio-language").as_deref(), Some("ja"));
    }

    #[test]
    fn open_default_uses_override_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let storage =
            FileStorage::open_default(Some(temp_dir.path().to_path_buf())).expect("storage");
        assert_eq!(storage.path(), temp_dir.path().join(STORAGE_FILE));
    }

    #[test]
    fn corrupted_file_starts_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(STORAGE_FILE);
        fs::write(&path, [0xff, 0x00, 0x13]).expect("write garbage");

        let mut storage = FileStorage::open(&path);
        assert_eq!(storage.get("portfolio-language"), None);

        storage.set("portfolio-language", "de").expect("overwrite");
        assert_eq!(
            FileStorage::open(&path).get("portfolio-language").as_deref(),
            Some("de")
        );
    }

    #[test]
    fn unwritable_location_reports_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, b"x").expect("write");

        let mut storage = FileStorage::open(blocker.join(STORAGE_FILE));
        assert!(storage.set("k", "v").is_err());
    }

    #[test]
    fn failed_write_is_retried_on_next_set() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("data");
        fs::write(&dir, b"x").expect("write blocker");
        let path = dir.join(STORAGE_FILE);

        let mut storage = FileStorage::open(&path);
        assert!(storage.set("k", "v").is_err());
        assert_eq!(storage.get("k"), None);

        fs::remove_file(&dir).expect("remove blocker");
        storage.set("k", "v").expect("retry");

        assert!(path.exists());
        assert_eq!(FileStorage::open(&path).get("k").as_deref(), Some("v"));
    }

    #[test]
    fn failed_overwrite_keeps_previous_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(STORAGE_FILE);

        let mut storage = FileStorage::open(&path);
        storage.set("k", "old").expect("first write");

        fs::remove_file(&path).expect("remove file");
        fs::create_dir(&path).expect("block file with a directory");

        assert!(storage.set("k", "new").is_err());
        assert_eq!(storage.get("k").as_deref(), Some("old"));
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "v").expect("set");
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        assert_eq!(storage.get("other"), None);
    }
}
