//! Unified error types for the log event handlers.
//! Used by: validate, writer, reader, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Display strings are what the client sees; store details stay in `source`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Method Not Allowed. Please use {0}.")]
    MethodNotAllowed(&'static str),

    #[error("Log entry missing from request body")]
    MissingBody,

    /// Transport failed to deliver the body; the detail is logged, not returned.
    #[error("Failed to read request body")]
    UnreadableBody(String),

    #[error("Invalid JSON in request body")]
    MalformedInput(#[source] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Failed to insert log entry")]
    Persistence(#[source] StoreError),

    #[error("Failed to fetch log records. Please try again later.")]
    Retrieval(#[source] StoreError),

    #[error("An unexpected error occurred")]
    Unexpected(String),
}

impl Error {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::MissingBody
            | Error::UnreadableBody(_)
            | Error::MalformedInput(_)
            | Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Persistence(_) | Error::Retrieval(_) | Error::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Error::Persistence(e) | Error::Retrieval(e) => {
                tracing::error!(error = %e, "{}", self);
            }
            Error::Unexpected(detail) => {
                tracing::error!(detail = %detail, "{}", self);
            }
            Error::UnreadableBody(detail) => {
                tracing::warn!(detail = %detail, "{}", self);
            }
            _ => {}
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
