use std::collections::BTreeMap;
use std::sync::Mutex;

use log::{debug, error};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;

/// In-process key-value storage. Nothing survives the process; used for tests
/// and for throwaway runs with `--backend memory`.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.items.lock().map_err(|_| {
            error!("MemoryStorage mutex poisoned");
            StorageError::ConnectionFailed
        })
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        debug!("Stored {} byte(s) under {}", value.len(), key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut items = self.lock()?;
        debug!("Clearing {} key(s) from memory", items.len());
        items.clear();
        Ok(())
    }
}
