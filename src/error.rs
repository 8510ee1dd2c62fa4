//! # Error Handling
//!
//! This module provides unified error handling for the BizTime API. Database
//! failures are classified once, at the repository boundary, into
//! [`RepositoryError`]; handlers convert that taxonomy into an [`ApiError`]
//! rendered as `{"error": {"message": ..., "status": ...}}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::telemetry;

const PG_UNIQUE: &str = "23505";
const PG_FOREIGN_KEY: &str = "23503";
const MYSQL_DUPLICATE_CODES: &[&str] = &["1022", "1062", "1169", "1586"];
const MYSQL_FOREIGN_KEY_CODES: &[&str] = &["1216", "1217", "1451", "1452"];
const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];
const SQLITE_FOREIGN_KEY_CODES: &[&str] = &["787"];

/// Message returned to clients for any unclassified failure.
const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Constraint violations the database reports and the API recovers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
}

/// Inspects a SeaORM error for a unique or foreign-key constraint violation.
pub fn constraint_violation(error: &sea_orm::DbErr) -> Option<ConstraintViolation> {
    use sea_orm::RuntimeErr;

    let runtime_err = match error {
        sea_orm::DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | sea_orm::DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return None,
    };

    let db_error = runtime_err.as_database_error()?;

    if db_error.is_unique_violation() {
        return Some(ConstraintViolation::Unique);
    }
    if db_error.is_foreign_key_violation() {
        return Some(ConstraintViolation::ForeignKey);
    }

    let code = db_error.code()?;
    let code_str: &str = code.as_ref();
    if code_str == PG_UNIQUE
        || MYSQL_DUPLICATE_CODES.contains(&code_str)
        || SQLITE_DUPLICATE_CODES.contains(&code_str)
    {
        return Some(ConstraintViolation::Unique);
    }
    if code_str == PG_FOREIGN_KEY
        || MYSQL_FOREIGN_KEY_CODES.contains(&code_str)
        || SQLITE_FOREIGN_KEY_CODES.contains(&code_str)
    {
        return Some(ConstraintViolation::ForeignKey);
    }

    None
}

/// Domain error taxonomy produced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The addressed resource does not exist
    #[error("{0}")]
    NotFound(String),
    /// A unique constraint rejected the write
    #[error("{0}")]
    AlreadyExists(String),
    /// A foreign key points at a row that does not exist
    #[error("{0}")]
    ReferenceMissing(String),
    /// The request cannot be turned into a valid row
    #[error("{0}")]
    Validation(String),
    /// Any other persistence failure
    #[error("database error: {0}")]
    Database(#[source] sea_orm::DbErr),
}

impl RepositoryError {
    /// Classifies a raw database error into the domain taxonomy.
    pub fn database_error(error: sea_orm::DbErr) -> Self {
        match constraint_violation(&error) {
            Some(ConstraintViolation::Unique) => {
                tracing::debug!(?error, "Unique constraint violation detected");
                Self::AlreadyExists("Resource already exists".to_string())
            }
            Some(ConstraintViolation::ForeignKey) => {
                tracing::debug!(?error, "Foreign key violation detected");
                Self::ReferenceMissing("Referenced resource not found".to_string())
            }
            None => Self::Database(error),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation_error<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Replaces the message of an `AlreadyExists` error, leaving other kinds untouched.
    pub fn on_conflict(self, message: &str) -> Self {
        match self {
            Self::AlreadyExists(_) => Self::AlreadyExists(message.to_string()),
            other => other,
        }
    }

    /// Replaces the message of a `ReferenceMissing` error, leaving other kinds untouched.
    pub fn on_missing_reference(self, message: &str) -> Self {
        match self {
            Self::ReferenceMissing(_) => Self::ReferenceMissing(message.to_string()),
            other => other,
        }
    }
}

/// Body of an error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error message and HTTP status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message
    #[schema(example = "Company not found")]
    pub message: String,
    /// HTTP status code
    #[schema(example = 404)]
    pub status: u16,
}

/// Unified API error returned by every handler
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code for the response
    pub status: StatusCode,
    /// Human-readable error message
    pub message: Box<str>,
}

impl ApiError {
    /// Create a new API error with the given status code and message
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            message: message.into().into_boxed_str(),
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    /// The JSON body rendered for this error
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                message: self.message.to_string(),
                status: self.status.as_u16(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(self.body())).into_response()
    }
}

// Error mappers for common sources

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, message),
            RepositoryError::AlreadyExists(message) => Self::new(StatusCode::CONFLICT, message),
            RepositoryError::ReferenceMissing(message) => Self::new(StatusCode::NOT_FOUND, message),
            RepositoryError::Validation(message) => Self::new(StatusCode::BAD_REQUEST, message),
            RepositoryError::Database(db_err) => {
                let trace_id = telemetry::current_trace_id();
                tracing::error!(?trace_id, "Database error: {:?}", db_err);
                Self::internal()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        let trace_id = telemetry::current_trace_id();
        tracing::error!(?trace_id, "Internal error: {:?}", error);
        Self::internal()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid path parameter: {}", rejection.body_text()),
        )
    }
}
