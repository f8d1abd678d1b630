//! # API Error Type
//!
//! Unified error type for intent commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation                 Rust Backend                              │
//! │  ────────────                 ────────────                              │
//! │                                                                         │
//! │  {"intent":"addCourse","name":"  "}                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<Snapshot, ApiError>                   │  │
//! │  │         │                                                        │  │
//! │  │  Validation Error? ── ValidationError::Required ──┐              │  │
//! │  │         │                                         ▼              │  │
//! │  │  Database Error? ──── DbError::QueryFailed ───► ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"type":"error","code":"VALIDATION_ERROR",                             │
//! │   "message":"course name is required"}                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage details are logged, never shown: the message for a database
//! failure is generic.

use serde::Serialize;
use tally_core::{CoreError, ValidationError};
use tally_db::DbError;

/// Error returned from intent commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for bridge responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced course or participant doesn't exist
    NotFound,

    /// Input validation failed, including dangling references
    ValidationError,

    /// Storage operation failed
    DatabaseError,

    /// Malformed bridge message
    InvalidRequest,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an error for a message that couldn't be parsed.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                ApiError::validation("Invalid reference")
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                tracing::error!("Database pool exhausted");
                ApiError::new(ErrorCode::DatabaseError, "Database busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CourseNotFound(id) => ApiError::not_found("Course", id),
            CoreError::ParticipantNotFound(id) => ApiError::not_found("Participant", id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_errors_hide_details() {
        let err: ApiError = DbError::QueryFailed("no such table: points".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("points"));
    }

    #[test]
    fn test_foreign_key_is_validation_error() {
        let err: ApiError = DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_core_errors() {
        let err: ApiError = CoreError::CourseNotFound(7).into();
        assert_eq!(err, ApiError::not_found("Course", 7));
        assert_eq!(err.message, "Course not found: 7");

        let err: ApiError = CoreError::ParticipantNotFound(3).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Participant not found: 3");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "participant name".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "participant name is required");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(ApiError::invalid_request("bad json")).unwrap();
        assert_eq!(json["code"], "INVALID_REQUEST");
        assert_eq!(json["message"], "bad json");
    }
}
