use thiserror::Error;

/// Store-level failures. These are not classified for clients and surface as 500s.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document ID: {0}")]
    InvalidDocumentId(String),

    #[error("Duplicate document ID: {0}")]
    DuplicateId(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for DbError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Request-level failures produced while building queries, validating records, or resolving ids.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("The requested todo id wasn't a legal identifier: {0}")]
    MalformedIdentifier(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] DbError),
}

impl TodoError {
    /// True for the classified, client-caused kinds (the ones that map to 4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
