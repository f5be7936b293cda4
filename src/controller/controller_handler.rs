use std::io::{BufRead, Write};
use std::sync::Arc;

use log::{debug, info};

use crate::configuration::cli::SubmitArgs;
use crate::configuration::config::Config;
use crate::configuration::types::{StorageBackend, StorageConfig};
use crate::error_handling::types::*;
use crate::form_session::prompt::Prompt;
use crate::form_session::FormSession;
use crate::storage::database_storage::DatabaseStorage;
use crate::storage::file_storage::FileStorage;
use crate::storage::memory_storage::MemoryStorage;
use crate::storage::record_store::RecordStore;
use crate::storage::storage_trait::Storage;
use crate::storage::types::SurveyRecord;
use crate::summary::{refresh_summary, SummaryBoard, SummaryCriteria};

/// Wires configuration, storage and the form together for the binary.
pub struct Controller {
    config: Config,
    store: RecordStore,
}

impl Controller {
    /// Opens the configured storage backend.
    pub fn new(config: Config) -> Result<Self, ControllerError> {
        config.validate()?;
        let storage = open_storage(&config.storage)?;
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, store: RecordStore::new(storage) }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// A fresh form with the configured default faculty.
    pub fn new_form(&self) -> FormSession {
        FormSession::new(self.config.default_faculty())
    }

    /// Fills a form from `args` and submits it.
    pub fn submit(&self, args: &SubmitArgs) -> Result<SurveyRecord, ControllerError> {
        let mut form = self.new_form();
        if let Some(faculty) = &args.faculty {
            form.set_faculty(faculty.as_str());
        }
        if let Some(stream) = args.stream {
            form.set_stream(stream);
        }
        if let Some(group) = &args.group {
            form.set_group(group.as_str());
        }
        form.set_subjects(args.subjects.iter().map(String::as_str));
        if let Some(grade) = &args.average_grade {
            form.set_average_grade(grade.as_str());
        }
        for technology in &args.technologies {
            form.set_technology(technology, true)?;
        }
        if let Some(time) = &args.interview_time {
            form.set_interview_time(time.as_str());
        }
        if let Some(color) = &args.favorite_color {
            form.set_favorite_color(color.as_str());
        }
        if let Some(email) = &args.email {
            form.set_email(email.as_str());
        }
        if let Some(comments) = &args.comments {
            form.set_comments(comments.as_str());
        }
        Ok(form.submit(&self.store)?)
    }

    /// Runs the interactive form over `input` / `output`.
    pub fn fill<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<usize, ControllerError> {
        let mut form = self.new_form();
        let submitted = Prompt::new(input, output)
            .with_faculties(self.config.form.faculties.clone())
            .run(&mut form, &self.store)?;
        info!("Interactive session stored {} response(s)", submitted);
        Ok(submitted)
    }

    /// Builds the summary board for `criteria` with the configured regions.
    pub fn summary(&self, criteria: &SummaryCriteria) -> Result<SummaryBoard, ControllerError> {
        if !criteria.min_grade.is_finite() {
            return Err(ConfigError::NotInRange(format!(
                "minimum grade must be a finite number, got {}",
                criteria.min_grade
            ))
            .into());
        }
        let mut board = SummaryBoard::with_regions(self.config.regions()?);
        refresh_summary(&self.store, criteria, &mut board);
        debug!("Summary refreshed for {:?}", criteria);
        Ok(board)
    }

    pub fn records_json(&self) -> Result<String, ControllerError> {
        serde_json::to_string_pretty(&self.store.read_all())
            .map_err(|e| ControllerError::SerializationFailed(e.to_string()))
    }

    /// Clears the store and returns the refreshed (empty) summary.
    pub fn clear(&self) -> Result<SummaryBoard, ControllerError> {
        self.store.clear()?;
        self.summary(&self.config.criteria())
    }
}

fn open_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>, StorageError> {
    let storage: Arc<dyn Storage> = match (config.backend, &config.path) {
        (StorageBackend::File, Some(path)) => Arc::new(FileStorage::new(path)?),
        (StorageBackend::File, None) => Arc::new(FileStorage::new_default()?),
        (StorageBackend::Sqlite, Some(path)) => {
            Arc::new(DatabaseStorage::new_file(path.join(DatabaseStorage::DEFAULT_DB_FILE))?)
        }
        (StorageBackend::Sqlite, None) => Arc::new(DatabaseStorage::new()?),
        (StorageBackend::Memory, _) => Arc::new(MemoryStorage::new()),
    };
    info!("Using {:?} storage", config.backend);
    Ok(storage)
}
