use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, error, info, warn};
use tempfile::NamedTempFile;

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;

/// Filesystem-backed key-value storage.
///
/// All keys live in a single JSON object in `<base_path>/local_storage.json`.
/// Every write rewrites the whole file through a temporary file in the same
/// directory, so a crash leaves either the old or the new map on disk.
pub struct FileStorage {
    base_path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStorage {
    const FILE_NAME: &'static str = "local_storage.json";

    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StorageError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            error!("Failed to create storage dir {}: {}", base_path.display(), e);
            StorageError::WriteFailed
        })?;
        info!("FileStorage initialized at {}", base_path.display());
        Ok(Self { base_path, lock: Mutex::new(()) })
    }

    /// Construct FileStorage using env var SURVEY_STORE_PATH if set, otherwise current directory.
    pub fn new_default() -> Result<Self, StorageError> {
        if let Ok(dir) = std::env::var("SURVEY_STORE_PATH") {
            info!("Using FileStorage from SURVEY_STORE_PATH: {}", dir);
            return Self::new(PathBuf::from(dir));
        }
        let cwd = std::env::current_dir().map_err(|e| {
            error!("Failed to get current dir: {}", e);
            StorageError::ReadFailed
        })?;
        info!("Using FileStorage at current directory: {}", cwd.display());
        Self::new(cwd)
    }

    pub fn file_path(&self) -> PathBuf {
        self.base_path.join(Self::FILE_NAME)
    }

    /// Loads the key map. A missing file or one that is not a JSON object of
    /// strings reads as empty; any other I/O failure is an error.
    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.file_path();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return Err(StorageError::ReadFailed);
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!("Unparsable storage file {}, treating as empty: {}", path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let path = self.file_path();
        let json = serde_json::to_string(map).map_err(|e| {
            error!("Failed to serialize storage map: {}", e);
            StorageError::WriteFailed
        })?;
        let mut tmp = NamedTempFile::new_in(&self.base_path).map_err(|e| {
            error!("Failed to create temp file in {}: {}", self.base_path.display(), e);
            StorageError::WriteFailed
        })?;
        tmp.write_all(json.as_bytes()).map_err(|e| {
            error!("Failed to write temp file for {}: {}", path.display(), e);
            StorageError::WriteFailed
        })?;
        tmp.persist(&path).map_err(|e| {
            error!("Failed to replace {}: {}", path.display(), e);
            StorageError::WriteFailed
        })?;
        debug!("Wrote {} key(s) to {}", map.len(), path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::ConnectionFailed)?;
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::ConnectionFailed)?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::ConnectionFailed)?;
        let path = self.file_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Cleared storage file {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to remove {}: {}", path.display(), e);
                Err(StorageError::WriteFailed)
            }
        }
    }
}
