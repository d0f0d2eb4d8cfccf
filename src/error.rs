//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalog server.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested item does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request payload failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Backing file could not be read
    #[error("Failed to read item data")]
    ReadFailure(String),

    /// Backing file content is not a valid item collection
    #[error("Failed to parse item data")]
    ParseFailure(String),

    /// Backing file could not be written
    #[error("Failed to write item data")]
    PersistenceFailure(String),
}

impl CatalogError {
    /// HTTP status code this error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CatalogError::ReadFailure(_)
            | CatalogError::ParseFailure(_)
            | CatalogError::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side detail of a storage failure. Logged, never sent to clients.
    pub fn detail(&self) -> Option<&str> {
        match self {
            CatalogError::ReadFailure(detail)
            | CatalogError::ParseFailure(detail)
            | CatalogError::PersistenceFailure(detail) => Some(detail),
            CatalogError::NotFound(_) | CatalogError::InvalidInput(_) => None,
        }
    }
}

// == Extractor Rejections ==
impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::InvalidInput(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Some(detail) = self.detail() {
            tracing::error!("Request failed: {}: {}", self, detail);
        }

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog server.
pub type Result<T> = std::result::Result<T, CatalogError>;
