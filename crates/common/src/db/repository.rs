//! Repository pattern for database operations
//!
//! Provides a clean interface for all data access operations
//! with proper error handling.

use crate::db::DbPool;
use crate::db::models::*;
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// Repository for data access operations
#[cfg_attr(not(feature = "mock"), derive(Clone))]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get the read connection
    fn read_conn(&self) -> &DatabaseConnection {
        self.pool.read()
    }

    /// Get the write connection
    fn write_conn(&self) -> &DatabaseConnection {
        self.pool.write()
    }

    // ========================================================================
    // Health Check
    // ========================================================================

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Journal Operations
    // ========================================================================

    /// Find journal by its short code
    pub async fn find_journal_by_code(&self, code: &str) -> Result<Option<Journal>> {
        JournalEntity::find()
            .filter(JournalColumn::Code.eq(code))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Article Operations
    // ========================================================================

    /// List all articles belonging to a journal
    pub async fn list_articles_by_journal(&self, journal_id: i32) -> Result<Vec<Article>> {
        ArticleEntity::find()
            .filter(ArticleColumn::JournalId.eq(journal_id))
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Audit Log Operations
    // ========================================================================

    /// Find audit log entries for a generic (content_type, object_id) reference
    /// whose description starts with the given prefix
    pub async fn find_log_entries(
        &self,
        content_type: &str,
        object_id: i64,
        description_prefix: &str,
    ) -> Result<Vec<LogEntry>> {
        LogEntryEntity::find()
            .filter(LogEntryColumn::ContentType.eq(content_type))
            .filter(LogEntryColumn::ObjectId.eq(object_id))
            .filter(LogEntryColumn::Description.starts_with(description_prefix))
            .order_by_asc(LogEntryColumn::Id)
            .all(self.read_conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Eschol Article Operations
    // ========================================================================

    /// Get or create the archival record for (article, ark, source_name).
    ///
    /// Returns the record and whether it was newly created. The lookup keys on
    /// the full composite, so re-runs find the existing row instead of
    /// inserting a duplicate.
    pub async fn get_or_create_eschol_article(
        &self,
        article_id: i32,
        ark: &str,
        source_name: &str,
    ) -> Result<(EscholArticle, bool)> {
        let existing = EscholArticleEntity::find()
            .filter(EscholArticleColumn::ArticleId.eq(article_id))
            .filter(EscholArticleColumn::Ark.eq(ark))
            .filter(EscholArticleColumn::SourceName.eq(source_name))
            .one(self.write_conn())
            .await?;

        if let Some(record) = existing {
            return Ok((record, false));
        }

        let now = chrono::Utc::now();

        let record = EscholArticleActiveModel {
            article_id: Set(article_id),
            ark: Set(ark.to_string()),
            source_name: Set(source_name.to_string()),
            is_doi_registered: Set(false),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let record = record.insert(self.write_conn()).await?;

        Ok((record, true))
    }

    /// Mark the archival record as having a registered DOI
    pub async fn mark_doi_registered(&self, record: EscholArticle) -> Result<EscholArticle> {
        let mut active: EscholArticleActiveModel = record.into();
        active.is_doi_registered = Set(true);
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(self.write_conn()).await.map_err(Into::into)
    }

    // ========================================================================
    // Identifier Operations
    // ========================================================================

    /// Find an identifier of the given type and value attached to an article
    pub async fn find_identifier(
        &self,
        article_id: i32,
        id_type: &str,
        identifier: &str,
    ) -> Result<Option<Identifier>> {
        IdentifierEntity::find()
            .filter(IdentifierColumn::ArticleId.eq(article_id))
            .filter(IdentifierColumn::IdType.eq(id_type))
            .filter(IdentifierColumn::Identifier.eq(identifier))
            .one(self.read_conn())
            .await
            .map_err(Into::into)
    }

    /// Create a new identifier attached to an article
    pub async fn create_identifier(
        &self,
        article_id: i32,
        id_type: &str,
        identifier: &str,
    ) -> Result<Identifier> {
        let record = IdentifierActiveModel {
            article_id: Set(article_id),
            id_type: Set(id_type.to_string()),
            identifier: Set(identifier.to_string()),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        record.insert(self.write_conn()).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn journal(id: i32, code: &str) -> Journal {
        Journal {
            id,
            code: code.to_string(),
            name: "Journal of Computational Studies".to_string(),
            created_at: chrono::Utc::now().into(),
        }
    }

    fn eschol(id: i32, article_id: i32, ark: &str, registered: bool) -> EscholArticle {
        EscholArticle {
            id,
            article_id,
            ark: ark.to_string(),
            source_name: "ojs".to_string(),
            is_doi_registered: registered,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    fn repo(db: sea_orm::DatabaseConnection) -> Repository {
        Repository::new(DbPool::from_connection(db))
    }

    #[tokio::test]
    async fn test_find_journal_by_code() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![journal(7, "jcs")]])
            .into_connection();

        let found = repo(db).find_journal_by_code("jcs").await.unwrap();
        assert_eq!(found.map(|j| j.id), Some(7));
    }

    #[tokio::test]
    async fn test_find_journal_by_code_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Journal>::new()])
            .into_connection();

        let found = repo(db).find_journal_by_code("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_or_create_eschol_article_existing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![eschol(3, 42, "ark:/13030/qt123", false)]])
            .into_connection();

        let (record, created) = repo(db)
            .get_or_create_eschol_article(42, "ark:/13030/qt123", "ojs")
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(record.id, 3);
        assert_eq!(record.ark, "ark:/13030/qt123");
    }

    #[tokio::test]
    async fn test_get_or_create_eschol_article_creates_when_absent() {
        // First result set: the composite-key lookup (empty).
        // Second: the row returned by INSERT ... RETURNING.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                Vec::<EscholArticle>::new(),
                vec![eschol(9, 42, "ark:/13030/qt123", false)],
            ])
            .into_connection();

        let (record, created) = repo(db)
            .get_or_create_eschol_article(42, "ark:/13030/qt123", "ojs")
            .await
            .unwrap();

        assert!(created);
        assert_eq!(record.id, 9);
        assert!(!record.is_doi_registered);
    }

    #[tokio::test]
    async fn test_mark_doi_registered() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![eschol(9, 42, "ark:/13030/qt123", true)]])
            .into_connection();

        let updated = repo(db)
            .mark_doi_registered(eschol(9, 42, "ark:/13030/qt123", false))
            .await
            .unwrap();

        assert!(updated.is_doi_registered);
    }

    #[tokio::test]
    async fn test_find_identifier_deduplication_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![Identifier {
                id: 1,
                article_id: 42,
                id_type: ID_TYPE_DOI.to_string(),
                identifier: "10.1234/x".to_string(),
                created_at: chrono::Utc::now().into(),
            }]])
            .into_connection();

        let found = repo(db)
            .find_identifier(42, ID_TYPE_DOI, "10.1234/x")
            .await
            .unwrap();

        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_find_log_entries_prefix_query() {
        let entry = LogEntry {
            id: 11,
            content_type: CONTENT_TYPE_ARTICLE.to_string(),
            object_id: 42,
            description: "Article 42 imported by Journal Transporter.".to_string(),
            created_at: chrono::Utc::now().into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![entry]])
            .into_connection();

        let entries = repo(db)
            .find_log_entries(CONTENT_TYPE_ARTICLE, 42, "Article 42 imported")
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].object_id, 42);
    }
}
