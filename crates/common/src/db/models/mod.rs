//! SeaORM entity models
//!
//! Database entities for the OpenPress admin tools

mod article;
mod eschol_article;
mod identifier;
mod journal;
mod log_entry;

pub use journal::{
    ActiveModel as JournalActiveModel, Column as JournalColumn, Entity as JournalEntity,
    Model as Journal,
};

pub use article::{
    ActiveModel as ArticleActiveModel, Column as ArticleColumn, Entity as ArticleEntity,
    Model as Article, STAGE_PUBLISHED,
};

pub use log_entry::{
    ActiveModel as LogEntryActiveModel, Column as LogEntryColumn, Entity as LogEntryEntity,
    Model as LogEntry, CONTENT_TYPE_ARTICLE,
};

pub use eschol_article::{
    ActiveModel as EscholArticleActiveModel, Column as EscholArticleColumn,
    Entity as EscholArticleEntity, Model as EscholArticle, ARK_PREFIX,
};

pub use identifier::{
    ActiveModel as IdentifierActiveModel, Column as IdentifierColumn, Entity as IdentifierEntity,
    Model as Identifier, ID_TYPE_DOI,
};
