//! Audit log entry entity
//!
//! Entries reference their subject through a generic (content_type, object_id)
//! pair rather than a foreign key, so any entity kind can carry audit history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Content-type tag for log entries attached to articles
pub const CONTENT_TYPE_ARTICLE: &str = "submission.article";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "log_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Entity-kind tag of the referenced object (e.g. "submission.article")
    #[sea_orm(column_type = "Text")]
    pub content_type: String,

    pub object_id: i64,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
