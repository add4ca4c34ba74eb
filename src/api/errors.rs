//! HTTP mapping for request errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::errors::TodoError;

impl TodoError {
    /// Get HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedIdentifier(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&TodoError> for ErrorResponse {
    fn from(err: &TodoError) -> Self {
        Self { code: err.status_code().as_u16(), error: err.to_string() }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if !self.is_client_error() {
            log::error!("request failed: {self}");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DbError;

    #[test]
    fn test_status_codes() {
        assert_eq!(TodoError::MalformedIdentifier("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TodoError::Validation("limit".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TodoError::NotFound("gone".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            TodoError::Store(DbError::Decode("bad".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn only_store_failures_are_server_errors() {
        assert!(TodoError::NotFound("gone".into()).is_client_error());
        let err = TodoError::Store(DbError::DuplicateId("x".into()));
        assert!(!err.is_client_error());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn body_carries_message_verbatim() {
        let body = ErrorResponse::from(&TodoError::Validation("status must be one of x".into()));
        assert_eq!(body.code, 400);
        assert_eq!(body.error, "status must be one of x");
    }
}
