use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::errors::TodoError;
use crate::query::{Filter, FindOptions};
use crate::store::Store;
use crate::types::DocumentId;

use super::builder::{QueryOptions, build_filter, build_query};
use super::model::{NewTodo, Todo};
use super::params::TodoQueryParams;

/// Request-facing todo operations over an explicitly supplied store handle.
pub struct TodoService {
    store: Arc<dyn Store>,
    options: QueryOptions,
}

impl TodoService {
    pub fn new(store: Arc<dyn Store>, options: QueryOptions) -> Self {
        Self { store, options }
    }

    /// Matching todos in sort order, truncated to the requested limit.
    ///
    /// # Errors
    /// Validation errors from query construction, or a store failure.
    pub fn list(&self, params: &TodoQueryParams) -> Result<Vec<Todo>, TodoError> {
        let query = build_query(params, &self.options)?;
        let cursor = self.store.find(&query.filter, &query.find_options())?;
        let todos = cursor.map(|d| Todo::from_document(&d.data)).collect::<Result<Vec<_>, _>>()?;
        log::debug!("list matched {} todos (limit {:?})", todos.len(), query.limit);
        Ok(todos)
    }

    /// Number of todos matching the filter parameters. Sort and limit parameters are ignored.
    ///
    /// # Errors
    /// Validation errors from filter construction, or a store failure.
    pub fn count(&self, params: &TodoQueryParams) -> Result<usize, TodoError> {
        let filter = build_filter(params, &self.options)?;
        Ok(self.store.count(&filter)?)
    }

    /// # Errors
    /// `MalformedIdentifier` when `raw_id` is not an ObjectId, `NotFound` when nothing matches.
    pub fn get(&self, raw_id: &str) -> Result<Todo, TodoError> {
        let id: DocumentId =
            raw_id.parse().map_err(|_| TodoError::MalformedIdentifier(raw_id.to_string()))?;
        let opts = FindOptions { sort: None, limit: NonZeroUsize::new(1) };
        let doc = self
            .store
            .find(&Filter::id_eq(id), &opts)?
            .next()
            .ok_or_else(|| TodoError::NotFound(format!("The requested todo was not found: {id}")))?;
        Ok(Todo::from_document(&doc.data)?)
    }

    /// Validates and inserts `candidate`, returning the store-assigned id.
    ///
    /// # Errors
    /// `Validation` for missing/empty required fields or an unknown category; nothing is inserted.
    pub fn create(&self, candidate: NewTodo) -> Result<DocumentId, TodoError> {
        let data = candidate.into_document(self.options.category_match)?;
        Ok(self.store.insert_one(data)?)
    }

    /// Deletes exactly one todo by id.
    ///
    /// # Errors
    /// `NotFound` when nothing was deleted, including when `raw_id` is not a legal identifier.
    pub fn delete(&self, raw_id: &str) -> Result<(), TodoError> {
        let not_found = || {
            TodoError::NotFound(format!(
                "Was unable to delete ID {raw_id}; perhaps illegal ID or an ID for an item not in the system?"
            ))
        };
        let id: DocumentId = raw_id.parse().map_err(|_| not_found())?;
        let report = self.store.delete_one(&Filter::id_eq(id))?;
        if report.deleted == 1 { Ok(()) } else { Err(not_found()) }
    }
}
