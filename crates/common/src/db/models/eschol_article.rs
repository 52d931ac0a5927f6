//! EscholArticle entity
//!
//! Associates an article with its persistent archival identifier (ark) in the
//! eScholarship repository.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Prefix of every eScholarship archival identifier
pub const ARK_PREFIX: &str = "ark:/13030/";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eschol_articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub article_id: i32,

    /// Archival identifier, format "ark:/13030/<suffix>"
    #[sea_orm(column_type = "Text")]
    pub ark: String,

    #[sea_orm(column_type = "Text")]
    pub source_name: String,

    pub is_doi_registered: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::article::Entity",
        from = "Column::ArticleId",
        to = "super::article::Column::Id"
    )]
    Article,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
