use std::env;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use crate::error_handling::types::StorageError;
use crate::storage::db_entities::{self as local_storage, Column, Entity};
use crate::storage::storage_trait::Storage;

/// SQLite-backed key-value storage.
///
/// The `Storage` trait is synchronous, so the backend owns a current-thread
/// runtime and blocks on every query.
pub struct DatabaseStorage {
    rt: tokio::runtime::Runtime,
    db: DatabaseConnection,
}

impl DatabaseStorage {
    /// Default database filename used in the application's working directory
    pub const DEFAULT_DB_FILE: &'static str = "survey.sqlite3";

    /// Create or open the database in SURVEY_STORE_PATH if set, otherwise the
    /// current working directory, with the default filename
    pub fn new() -> Result<Self, StorageError> {
        let dir = match env::var("SURVEY_STORE_PATH") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => env::current_dir().map_err(|_| StorageError::ConnectionFailed)?,
        };
        Self::new_file(dir.join(Self::DEFAULT_DB_FILE))
    }

    pub fn new_file<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                error!("Failed to build database runtime: {}", e);
                StorageError::ConnectionFailed
            })?;
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent() {
            std::fs::create_dir_all(parent).map_err(|_| StorageError::WriteFailed)?;
        }
        let url = format!("sqlite://{}?mode=rwc", path_ref.display());
        let db = rt.block_on(async {
            let db = Database::connect(url.as_str()).await.map_err(|e| {
                error!("Failed to open {}: {}", url, e);
                StorageError::ConnectionFailed
            })?;
            let backend = db.get_database_backend();
            let mut create = Schema::new(backend).create_table_from_entity(Entity);
            create.if_not_exists();
            db.execute(backend.build(&create)).await.map_err(|e| {
                error!("Failed to create local_storage table: {}", e);
                StorageError::WriteFailed
            })?;
            Ok::<_, StorageError>(db)
        })?;
        info!("DatabaseStorage initialized at {}", path_ref.display());
        Ok(Self { rt, db })
    }
}

impl Storage for DatabaseStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.rt.block_on(async {
            let row = Entity::find_by_id(key.to_string())
                .one(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to read key {}: {}", key, e);
                    StorageError::ReadFailed
                })?;
            Ok(row.map(|m| m.value))
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.rt.block_on(async {
            let row = local_storage::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
            };
            Entity::insert(row)
                .on_conflict(
                    OnConflict::column(Column::Key)
                        .update_column(Column::Value)
                        .to_owned(),
                )
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to write key {}: {}", key, e);
                    StorageError::WriteFailed
                })?;
            debug!("Stored {} byte(s) under {}", value.len(), key);
            Ok(())
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.rt.block_on(async {
            let res = Entity::delete_many().exec(&self.db).await.map_err(|e| {
                error!("Failed to clear local_storage: {}", e);
                StorageError::WriteFailed
            })?;
            info!("Cleared {} key(s) from local_storage", res.rows_affected);
            Ok(())
        })
    }
}
