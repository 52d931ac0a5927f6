//! Import audit-trail extraction
//!
//! Articles imported by Journal Transporter carry one audit log entry whose
//! description is a fixed marker followed by a JSON metadata payload. This
//! module locates the payload and pulls the original OJS id out of its
//! `external_identifiers` list.

use serde::Deserialize;
use thiserror::Error;

/// Substring separating the human-readable marker from the JSON payload
pub const METADATA_MARKER: &str = "Import metadata:";

/// Name of the external identifier holding the OJS id
const SOURCE_ID_NAME: &str = "source_id";

/// Description prefix of the import log entry for an article
pub fn import_marker(article_id: i32) -> String {
    format!("Article {} imported by Journal Transporter.", article_id)
}

#[derive(Error, Debug)]
pub enum MetadataParseError {
    #[error("description has no \"{METADATA_MARKER}\" payload")]
    MissingMarker,

    #[error("invalid metadata JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
pub struct ImportMetadata {
    pub external_identifiers: Vec<ExternalIdentifier>,
}

#[derive(Debug, Deserialize)]
pub struct ExternalIdentifier {
    pub name: String,
    pub value: String,
}

impl ImportMetadata {
    /// The OJS id recorded at import time, if any.
    ///
    /// Explicit search over the identifier list; an absent `source_id` entry
    /// is reported as `None`, never substituted from elsewhere.
    pub fn source_id(&self) -> Option<&str> {
        self.external_identifiers
            .iter()
            .find(|i| i.name == SOURCE_ID_NAME)
            .map(|i| i.value.as_str())
    }
}

/// Parse the JSON payload following the metadata marker in a log entry
/// description.
pub fn parse_import_metadata(description: &str) -> Result<ImportMetadata, MetadataParseError> {
    let (_, payload) = description
        .split_once(METADATA_MARKER)
        .ok_or(MetadataParseError::MissingMarker)?;

    Ok(serde_json::from_str(payload.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = "Article 42 imported by Journal Transporter. Import metadata: \
        {\"external_identifiers\": [{\"name\": \"source_id\", \"value\": \"OJS100\"}]}";

    #[test]
    fn test_import_marker_format() {
        assert_eq!(
            import_marker(42),
            "Article 42 imported by Journal Transporter."
        );
    }

    #[test]
    fn test_parse_import_metadata() {
        let metadata = parse_import_metadata(DESCRIPTION).unwrap();
        assert_eq!(metadata.external_identifiers.len(), 1);
        assert_eq!(metadata.source_id(), Some("OJS100"));
    }

    #[test]
    fn test_source_id_absent_is_none() {
        let metadata = parse_import_metadata(
            "Article 7 imported by Journal Transporter. Import metadata: \
             {\"external_identifiers\": [{\"name\": \"submission_id\", \"value\": \"77\"}]}",
        )
        .unwrap();

        assert_eq!(metadata.source_id(), None);
    }

    #[test]
    fn test_source_id_first_match_wins() {
        let metadata = parse_import_metadata(
            "Article 7 imported by Journal Transporter. Import metadata: \
             {\"external_identifiers\": [\
                {\"name\": \"source_id\", \"value\": \"OJS1\"}, \
                {\"name\": \"source_id\", \"value\": \"OJS2\"}]}",
        )
        .unwrap();

        assert_eq!(metadata.source_id(), Some("OJS1"));
    }

    #[test]
    fn test_missing_marker_is_error() {
        let err = parse_import_metadata("Article 42 imported by Journal Transporter.").unwrap_err();
        assert!(matches!(err, MetadataParseError::MissingMarker));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = parse_import_metadata("Import metadata: {not json").unwrap_err();
        assert!(matches!(err, MetadataParseError::Json(_)));
    }
}
