//! Article entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stage value for articles that have completed publication
pub const STAGE_PUBLISHED: &str = "Published";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub journal_id: i32,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    /// Free-text workflow stage (e.g. "Published", "Under Review")
    #[sea_orm(column_type = "Text")]
    pub stage: String,

    pub date_published: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journal::Entity",
        from = "Column::JournalId",
        to = "super::journal::Column::Id"
    )]
    Journal,

    #[sea_orm(has_many = "super::identifier::Entity")]
    Identifiers,

    #[sea_orm(has_many = "super::eschol_article::Entity")]
    EscholArticles,
}

impl Related<super::journal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journal.def()
    }
}

impl Related<super::identifier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Identifiers.def()
    }
}

impl Related<super::eschol_article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EscholArticles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the article has reached the published stage
    pub fn is_published(&self) -> bool {
        self.stage == STAGE_PUBLISHED
    }
}
