use std::sync::Arc;

use log::{debug, info, warn};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;
use crate::storage::types::{SurveyRecord, SURVEY_DATA_KEY};

/// The list of submitted survey records, kept as one JSON array under
/// [`SURVEY_DATA_KEY`] in a key-value [`Storage`].
///
/// The list is unindexed: every append rewrites it in full and every read
/// loads it in full. Filtering is left to the caller.
#[derive(Clone)]
pub struct RecordStore {
    storage: Arc<dyn Storage>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Appends `record` to the stored list.
    ///
    /// Read-modify-write without any cross-process guard; the last writer wins.
    /// A backend read failure aborts before anything is written.
    pub fn append(&self, record: &SurveyRecord) -> Result<(), StorageError> {
        let mut records = self.load()?;
        records.push(record.clone());
        let json = serde_json::to_string(&records).map_err(|e| {
            warn!("Failed to serialize survey records: {}", e);
            StorageError::WriteFailed
        })?;
        self.storage.set_item(SURVEY_DATA_KEY, &json)?;
        info!("Stored survey response from {} ({} total)", record.email, records.len());
        Ok(())
    }

    /// Returns every stored record in submission order.
    ///
    /// Never fails: an absent slot, a slot that is not a list of records, or a
    /// backend read error all yield an empty list.
    pub fn read_all(&self) -> Vec<SurveyRecord> {
        self.load().unwrap_or_else(|e| {
            warn!("Unable to read {}, treating as empty: {}", SURVEY_DATA_KEY, e);
            Vec::new()
        })
    }

    // Absent or unparsable slots are empty; only backend errors surface.
    fn load(&self) -> Result<Vec<SurveyRecord>, StorageError> {
        let Some(raw) = self.storage.get_item(SURVEY_DATA_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<SurveyRecord>>(&raw) {
            Ok(records) => {
                debug!("Loaded {} survey record(s)", records.len());
                Ok(records)
            }
            Err(e) => {
                warn!("Stored {} is not a record list, treating as empty: {}", SURVEY_DATA_KEY, e);
                Ok(Vec::new())
            }
        }
    }

    /// Empties the whole underlying storage, not only the survey key.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.clear()?;
        info!("Survey storage cleared");
        Ok(())
    }
}
