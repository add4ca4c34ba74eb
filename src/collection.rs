use crate::document::Document;
use crate::errors::DbError;
use crate::types::{CollectionName, DocumentId};
use parking_lot::RwLock;

/// An in-memory document collection. Documents keep their insertion order, which is the
/// order `find` sees before any sort is applied.
pub struct Collection {
    name: CollectionName,
    docs: RwLock<Vec<Document>>,
}

impl Collection {
    pub fn new(name: impl Into<CollectionName>) -> Self {
        Self { name: name.into(), docs: RwLock::new(Vec::new()) }
    }

    pub fn name_str(&self) -> &str {
        &self.name
    }

    /// Appends `document`. Ids are unique within a collection.
    ///
    /// # Errors
    /// `DbError::DuplicateId` when a document with the same id is already stored.
    pub fn insert_document(&self, document: Document) -> Result<DocumentId, DbError> {
        let doc_id = document.id;
        let mut docs = self.docs.write();
        if docs.iter().any(|d| d.id == doc_id) {
            return Err(DbError::DuplicateId(doc_id.to_hex()));
        }
        docs.push(document);
        Ok(doc_id)
    }

    pub fn find_document(&self, id: &DocumentId) -> Option<Document> {
        self.docs.read().iter().find(|d| d.id == *id).cloned()
    }

    /// Removes the first document (in insertion order) accepted by `pred`, atomically.
    pub fn remove_first_where<F>(&self, pred: F) -> Option<Document>
    where
        F: Fn(&Document) -> bool,
    {
        let mut docs = self.docs.write();
        let pos = docs.iter().position(pred)?;
        Some(docs.remove(pos))
    }

    /// Clones every document under a single read lock.
    pub fn get_all_documents(&self) -> Vec<Document> {
        self.docs.read().clone()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}
