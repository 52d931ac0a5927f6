//! Admin CLI error types

use crate::audit::MetadataParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Journal not found: {0}")]
    JournalNotFound(String),

    #[error("Export file error: {0}")]
    Export(#[from] csv::Error),

    #[error("Malformed import metadata for article {article_id}: {source}")]
    Metadata {
        article_id: i32,
        #[source]
        source: MetadataParseError,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<openpress_common::errors::AppError> for AdminError {
    fn from(e: openpress_common::errors::AppError) -> Self {
        AdminError::Database(e.to_string())
    }
}
