//! File-backed storage: one JSON file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};

use super::KeyValueStorage;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a reader never observes a partially written value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) the storage directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_console::storage::{FileStorage, KeyValueStorage};
    ///
    /// let storage = FileStorage::open("./data")?;
    /// storage.set("hr_user", r#"{"username":"Admin","role":"Admin"}"#)?;
    /// # Ok::<(), hr_console::error::ConsoleError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(dir: P) -> ConsoleResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| ConsoleError::StorageWrite {
            key: dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    /// The directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConsoleError::StorageRead {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> ConsoleResult<()> {
        let target = self.path_for(key);
        let staging = self.dir.join(format!("{}.json.tmp", key));
        let write_error = |e: std::io::Error| ConsoleError::StorageWrite {
            key: key.to_string(),
            message: e.to_string(),
        };

        fs::write(&staging, value).map_err(write_error)?;
        fs::rename(&staging, &target).map_err(write_error)?;
        debug!(key, bytes = value.len(), "Persisted storage key");
        Ok(())
    }

    fn remove(&self, key: &str) -> ConsoleResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConsoleError::StorageWrite {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
