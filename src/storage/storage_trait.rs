//! Storage Trait
//!
//! This module defines the `Storage` trait, a minimal string key-value
//! interface modelled on a browser's local storage slot.
//!
//! Implementors of this trait are responsible for:
//! - Returning the value stored under a key, if any
//! - Replacing the value stored under a key
//! - Dropping every key they hold on `clear`
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::error_handling::types::StorageError;

/// The `Storage` trait defines the interface for key-value storage backends.
///
/// Values are opaque strings; interpreting them is left to the caller (see
/// `RecordStore`).
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes every key held by the backend.
    fn clear(&self) -> Result<(), StorageError>;
}
