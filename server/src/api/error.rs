//! API error type and its mapping to HTTP responses.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::roster::RosterError;
use crate::store::StoreError;

/// Errors surfaced by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Roster operation failed.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// Request body is not valid JSON for the endpoint.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// A path segment could not be parsed.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Roster(RosterError::Domain(err))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Roster(RosterError::Store(err))
    }
}

impl ApiError {
    /// HTTP status and machine-readable kind for this error.
    #[must_use]
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Roster(RosterError::Store(StoreError::Unavailable(_))) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable")
            }
            Self::Roster(RosterError::Store(StoreError::VersionMismatch { .. })) => {
                (StatusCode::CONFLICT, "version_mismatch")
            }
            Self::Roster(RosterError::Domain(
                DomainError::MemberNotFound(_) | DomainError::HistoryEntryNotFound { .. },
            )) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Roster(RosterError::Domain(DomainError::InvalidInput(_))) => {
                (StatusCode::BAD_REQUEST, "invalid_input")
            }
            Self::Roster(RosterError::Domain(DomainError::DuplicateMember(_))) => {
                (StatusCode::BAD_REQUEST, "duplicate_member")
            }
            Self::InvalidBody(_) => (StatusCode::BAD_REQUEST, "invalid_body"),
            Self::InvalidPath(_) => (StatusCode::BAD_REQUEST, "invalid_path"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "error_type": error_type,
        }));

        (status, body).into_response()
    }
}
