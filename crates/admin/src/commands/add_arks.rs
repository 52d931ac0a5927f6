//! Backfill eScholarship ark records for articles imported from OJS.
//!
//! For every article of the named journal this walks the import audit trail,
//! extracts the OJS id recorded by Journal Transporter, and resolves it
//! against the export file to attach an archival (ark) record and, where the
//! export carries one, a DOI identifier. One article's failure is reported and
//! skipped; the run continues.
//!
//! Per-article units of work are independent: no batch transaction, no
//! retries. Re-runs are idempotent for both the ark record (composite-key
//! get-or-create) and the DOI identifier (looked up before creation).

use crate::audit;
use crate::errors::AdminError;
use crate::export::{self, ExportRecord};
use openpress_common::db::models::{
    Article, LogEntry, ARK_PREFIX, CONTENT_TYPE_ARTICLE, ID_TYPE_DOI,
};
use openpress_common::db::Repository;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub articles: usize,
    pub arks_created: usize,
    pub arks_existing: usize,
    pub dois_added: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Outcome of the per-article decision tree, before any write is performed
#[derive(Debug, PartialEq)]
enum ArticleOutcome<'a> {
    NoLogEntries,
    MultipleLogEntries(usize),
    MissingSourceId,
    NotInExport { published: bool },
    Matched { record: &'a ExportRecord, ark: String },
}

/// Run the backfill for one journal against the given export file.
pub async fn run(
    repo: &Repository,
    journal_code: &str,
    import_file: &Path,
) -> Result<RunSummary, AdminError> {
    let journal = repo
        .find_journal_by_code(journal_code)
        .await?
        .ok_or_else(|| AdminError::JournalNotFound(journal_code.to_string()))?;

    let id_map = export::load_export_map(import_file)?;
    info!(journal = %journal.code, rows = id_map.len(), "Loaded export map");

    let articles = repo.list_articles_by_journal(journal.id).await?;
    info!(articles = articles.len(), "Processing journal articles");

    let mut summary = RunSummary::default();

    for article in &articles {
        summary.articles += 1;
        process_article(repo, article, &id_map, &mut summary).await?;
    }

    Ok(summary)
}

async fn process_article(
    repo: &Repository,
    article: &Article,
    id_map: &HashMap<String, ExportRecord>,
    summary: &mut RunSummary,
) -> Result<(), AdminError> {
    let marker = audit::import_marker(article.id);
    let entries = repo
        .find_log_entries(CONTENT_TYPE_ARTICLE, i64::from(article.id), &marker)
        .await?;

    match resolve_outcome(article, &entries, id_map)? {
        ArticleOutcome::NoLogEntries => {
            println!("ERROR Article {}: no log entries found", article.id);
            summary.errors += 1;
        }
        ArticleOutcome::MultipleLogEntries(_) => {
            println!("ERROR Article {}: multiple log entries found", article.id);
            summary.errors += 1;
        }
        ArticleOutcome::MissingSourceId => {
            println!(
                "ERROR Article {}: import metadata has no source_id identifier",
                article.id
            );
            summary.errors += 1;
        }
        ArticleOutcome::NotInExport { published: true } => {
            println!(
                "ERROR Published article {}: OJS id not found in export",
                article.id
            );
            summary.errors += 1;
        }
        ArticleOutcome::NotInExport { published: false } => {
            summary.skipped += 1;
        }
        ArticleOutcome::Matched { record, ark } => {
            attach_ark(repo, article, record, &ark, summary).await?;
        }
    }

    Ok(())
}

/// Resolve the decision tree for one article without touching the store.
fn resolve_outcome<'a>(
    article: &Article,
    entries: &[LogEntry],
    id_map: &'a HashMap<String, ExportRecord>,
) -> Result<ArticleOutcome<'a>, AdminError> {
    let entry = match entries {
        [] => return Ok(ArticleOutcome::NoLogEntries),
        [entry] => entry,
        _ => return Ok(ArticleOutcome::MultipleLogEntries(entries.len())),
    };

    let metadata =
        audit::parse_import_metadata(&entry.description).map_err(|source| AdminError::Metadata {
            article_id: article.id,
            source,
        })?;

    let ojs_id = match metadata.source_id() {
        Some(id) => id,
        None => return Ok(ArticleOutcome::MissingSourceId),
    };

    match id_map.get(ojs_id) {
        Some(record) => Ok(ArticleOutcome::Matched {
            record,
            ark: format!("{}{}", ARK_PREFIX, record.ark_suffix),
        }),
        None => Ok(ArticleOutcome::NotInExport {
            published: article.is_published(),
        }),
    }
}

async fn attach_ark(
    repo: &Repository,
    article: &Article,
    record: &ExportRecord,
    ark: &str,
    summary: &mut RunSummary,
) -> Result<(), AdminError> {
    let (eschol, created) = repo
        .get_or_create_eschol_article(article.id, ark, &record.source)
        .await?;

    if created {
        println!("Created eschol article {}", ark);
        summary.arks_created += 1;
    } else {
        println!("Got eschol article {}", ark);
        summary.arks_existing += 1;
    }

    if let Some(ref doi) = record.doi {
        if repo
            .find_identifier(article.id, ID_TYPE_DOI, doi)
            .await?
            .is_none()
        {
            let identifier = repo.create_identifier(article.id, ID_TYPE_DOI, doi).await?;
            println!("Added doi {}", identifier.identifier);
            summary.dois_added += 1;
        } else {
            println!("Doi {} already recorded", doi);
        }

        if !eschol.is_doi_registered {
            repo.mark_doi_registered(eschol).await?;
        }
    }

    Ok(())
}
