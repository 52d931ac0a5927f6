//! Export file loader
//!
//! Reads the tab-separated export produced by the archival (jschol) database
//! and builds an in-memory map from OJS external id to ark suffix, source, and
//! DOI. The expected file comes from a query joining `arks`, `unit_items`, and
//! `items` for a single journal unit, with the `doi` column SQL-exported as
//! the literal string "NULL" when absent.

use crate::errors::AdminError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// SQL null sentinel emitted by the export query
const NULL_SENTINEL: &str = "NULL";

/// Raw row as it appears in the export file
#[derive(Debug, Deserialize)]
struct ExportRow {
    /// Ark suffix (the part after "ark:/13030/")
    id: String,
    source: String,
    external_id: String,
    #[serde(default)]
    doi: Option<String>,
}

/// One resolved export entry, keyed by external id in the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub ark_suffix: String,
    pub source: String,
    pub doi: Option<String>,
}

/// Load the export file into a map keyed by external id.
///
/// Duplicate external ids are not rejected; the last row wins. A missing or
/// unreadable file, or a row missing the required columns, is a fatal error.
pub fn load_export_map(path: &Path) -> Result<HashMap<String, ExportRecord>, AdminError> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_path(path)?;

    let mut map = HashMap::new();

    for row in reader.deserialize::<ExportRow>() {
        let row = row?;

        let doi = row
            .doi
            .filter(|d| !d.is_empty() && d.as_str() != NULL_SENTINEL);

        map.insert(
            row.external_id,
            ExportRecord {
                ark_suffix: row.id,
                source: row.source,
                doi,
            },
        );
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_export(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_export_map() {
        let file = write_export(
            "id\tsource\texternal_id\tdoi\n\
             qt123\tojs\tOJS100\t10.1234/x\n\
             qt456\tojs\tOJS200\tNULL\n",
        );

        let map = load_export_map(file.path()).unwrap();
        assert_eq!(map.len(), 2);

        let with_doi = &map["OJS100"];
        assert_eq!(with_doi.ark_suffix, "qt123");
        assert_eq!(with_doi.source, "ojs");
        assert_eq!(with_doi.doi.as_deref(), Some("10.1234/x"));

        // "NULL" is the SQL-export sentinel, not a real DOI
        assert_eq!(map["OJS200"].doi, None);
    }

    #[test]
    fn test_duplicate_external_id_last_row_wins() {
        let file = write_export(
            "id\tsource\texternal_id\tdoi\n\
             qt111\tojs\tOJS100\tNULL\n\
             qt222\tojs\tOJS100\t10.9999/z\n",
        );

        let map = load_export_map(file.path()).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["OJS100"].ark_suffix, "qt222");
        assert_eq!(map["OJS100"].doi.as_deref(), Some("10.9999/z"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_export(
            "id\tsource\texternal_id\tdoi\ttitle\n\
             qt123\tojs\tOJS100\tNULL\tSome Title\n",
        );

        let map = load_export_map(file.path()).unwrap();
        assert_eq!(map["OJS100"].ark_suffix, "qt123");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_export_map(Path::new("/nonexistent/export.tsv")).unwrap_err();
        assert!(matches!(err, AdminError::Export(_)));
    }
}
