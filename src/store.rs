//! The document-store seam the todo service is written against.

use crate::collection::Collection;
use crate::document::Document;
use crate::errors::DbError;
use crate::logger::AUDIT_TARGET;
use crate::query::{self, Cursor, DeleteReport, Filter, FindOptions};
use crate::types::DocumentId;
use bson::Document as BsonDocument;

/// Filter/sort/limit/count/insert/delete primitives over one collection.
///
/// Implementations must be safe to share across request handlers.
pub trait Store: Send + Sync {
    /// # Errors
    /// Implementation-specific store failure.
    fn find(&self, filter: &Filter, opts: &FindOptions) -> Result<Cursor, DbError>;

    /// # Errors
    /// Implementation-specific store failure.
    fn count(&self, filter: &Filter) -> Result<usize, DbError>;

    /// Inserts `data`, assigning an `_id` when it has none, and returns the id.
    ///
    /// # Errors
    /// `DbError::DuplicateId` when `data` carries an id already stored, or an
    /// implementation-specific store failure.
    fn insert_one(&self, data: BsonDocument) -> Result<DocumentId, DbError>;

    /// Deletes at most one document matching `filter`.
    ///
    /// # Errors
    /// Implementation-specific store failure.
    fn delete_one(&self, filter: &Filter) -> Result<DeleteReport, DbError>;
}

impl Store for Collection {
    fn find(&self, filter: &Filter, opts: &FindOptions) -> Result<Cursor, DbError> {
        Ok(query::find_docs(self, filter, opts))
    }

    fn count(&self, filter: &Filter) -> Result<usize, DbError> {
        Ok(query::count_docs(self, filter))
    }

    fn insert_one(&self, data: BsonDocument) -> Result<DocumentId, DbError> {
        let id = self.insert_document(Document::new(data))?;
        log::info!(target: AUDIT_TARGET, "insert collection={} id={}", self.name_str(), id);
        Ok(id)
    }

    fn delete_one(&self, filter: &Filter) -> Result<DeleteReport, DbError> {
        let report = query::delete_one(self, filter);
        if report.deleted > 0 {
            log::info!(target: AUDIT_TARGET, "delete collection={} deleted={}", self.name_str(), report.deleted);
        }
        Ok(report)
    }
}
