//! Identifier entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Identifier type for digital object identifiers
pub const ID_TYPE_DOI: &str = "doi";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "identifiers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub article_id: i32,

    /// Identifier scheme (e.g. "doi")
    #[sea_orm(column_type = "Text")]
    pub id_type: String,

    #[sea_orm(column_type = "Text")]
    pub identifier: String,

    pub created_at: DateTimeWithTimeZone,
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
