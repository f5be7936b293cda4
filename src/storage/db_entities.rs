//! SeaORM entity model used by the database storage backend.
//!
//! Maps to the single `local_storage` table created by `database_storage`.

use sea_orm::entity::prelude::*;

/// One key-value pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "local_storage")]
pub struct Model {
    /// Storage key, e.g. `surveyData`
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Opaque string value
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
