//! # HTTP API
//!
//! Axum routes exposing the todo service as JSON.

mod access;
pub mod errors;
mod routes;

pub use errors::ErrorResponse;
pub use routes::{CreatedResponse, router};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::DbError;
use crate::todo::TodoService;

/// Bind `config.bind` and serve until the process is stopped.
///
/// # Errors
/// Returns `DbError::Io` if the address cannot be bound or the server fails.
pub async fn serve(config: &AppConfig, service: Arc<TodoService>) -> Result<(), DbError> {
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    log::info!("todolite listening on {}", listener.local_addr()?);
    axum::serve(listener, router(service, &config.api_prefix)).await?;
    Ok(())
}
