//! Error Types
//!
//! Layered error types and the single boundary that turns every failure into
//! a response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::shared::envelope::{Envelope, ResultCode};

/// Message returned for faults whose detail must not leak to clients
pub const INTERNAL_ERROR_MESSAGE: &str = "服务器内部错误";

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

impl RepositoryError {
    /// Classify a sqlx error by the PostgreSQL constraint it violated
    ///
    /// Foreign-key violations mean the referenced entity is missing; unique
    /// violations mean a concurrent writer got there first.
    #[must_use]
    pub fn classify(err: sqlx::Error, subject: impl Into<String>) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() {
                return Self::NotFound(subject.into());
            }
            if db.is_unique_violation() {
                return Self::Conflict(subject.into());
            }
        }
        Self::Database(err)
    }
}

/// Use case-level errors for application logic failures
///
/// Messages on `NotFound`, `Conflict` and `Unauthorized` are shown to end
/// users verbatim.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    ///
    /// Credential and uniqueness failures travel as 200 with a failure
    /// envelope, which is what deployed clients expect.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Unauthorized(_) => StatusCode::OK,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the envelope code for this error
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) | Self::Unauthorized(_) => ResultCode::Fail,
            Self::NotFound(_) => ResultCode::NotFound,
            Self::Repository(_) => ResultCode::InternalServerError,
        }
    }

    /// Message placed in the failure envelope
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.join("; "),
            Self::Repository(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UseCase(uc_error) => {
                if let UseCaseError::Repository(source) = uc_error {
                    tracing::error!(error = %source, "Collaborator fault");
                }
                (uc_error.status_code(), uc_error.result_code(), uc_error.client_message())
            }
            ApiError::BadRequest(msg) => {
                tracing::debug!(reason = %msg, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, ResultCode::Fail, msg.clone())
            }
        };

        (status, Envelope::fail(code, message)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
