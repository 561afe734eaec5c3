//! Error types and HTTP response conversion

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Storage gateway failure, including "not found"
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Path segment that does not parse as a user id
    #[error("invalid user id {id:?}: {reason}")]
    InvalidId { id: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed
    #[error("Tracing error: {0}")]
    Tracing(String),
}

impl Error {
    /// Message written to the response body
    ///
    /// Storage failures report the raw driver message, without the
    /// operation/kind prefix used in logs.
    pub fn body(&self) -> String {
        match self {
            Error::Repository(e) => e.message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Repository(e) => tracing::error!(
                operation = %e.operation,
                kind = %e.kind,
                entity_id = ?e.entity_id,
                "Repository error: {}", e.message
            ),
            other => tracing::error!("Request failed: {}", other),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body(),
        )
            .into_response()
    }
}

// Manual From implementations for boxed errors
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
