pub mod api;
pub mod cli;
pub mod collection;
pub mod config;
pub mod document;
pub mod errors;
pub mod import;
pub mod logger;
pub mod query;
pub mod store;
pub mod todo;
pub mod types;

use crate::collection::Collection;
use crate::config::AppConfig;
use crate::errors::DbError;
use crate::todo::TodoService;
use std::sync::Arc;

/// Name of the collection the service reads and writes.
pub const TODO_COLLECTION: &str = "todos";

/// Builds the in-memory todo collection, seeds it from `config.seed_file` when set,
/// and wraps it in a `TodoService`.
///
/// # Errors
/// Returns an error if the seed file cannot be read or parsed.
pub fn open(config: &AppConfig) -> Result<TodoService, DbError> {
    let collection = Arc::new(Collection::new(TODO_COLLECTION));
    if let Some(seed) = &config.seed_file {
        import::load_seed(seed, &collection)?;
    }
    Ok(TodoService::new(collection, config.query_options()))
}
