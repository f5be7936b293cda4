//! Storage subsystem
//!
//! This module provides the key-value storage abstraction and the survey
//! record list built on top of it.
//!
//! Components:
//! - `storage_trait`: the Storage trait, a local-storage style key-value API.
//! - `types`: the `SurveyRecord` model and the fixed storage key.
//! - `file_storage`: a single JSON file per store location.
//! - `database_storage`: ORM-based SQLite implementation using SeaORM.
//! - `db_entities`: SeaORM entity model for the database backend.
//! - `memory_storage`: process-local storage for tests and throwaway runs.
//! - `record_store`: append / read-all / clear over the `surveyData` slot.
//! - `record_filter`: the faculty, technology and grade filters.

pub mod database_storage;
pub mod db_entities;
pub mod file_storage;
pub mod memory_storage;
pub mod record_filter;
pub mod record_store;
pub mod storage_trait;
pub mod types;

pub use record_store::RecordStore;
pub use storage_trait::Storage;
pub use types::SurveyRecord;
