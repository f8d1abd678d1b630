//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Domain lookups and rule violations             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  App errors (apps/tally)                                               │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised above the database layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An intent referenced a course that is not in the current snapshot.
    #[error("Course not found: {0}")]
    CourseNotFound(i64),

    /// An intent referenced a participant that is not in the current snapshot.
    #[error("Participant not found: {0}")]
    ParticipantNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "course name".to_string(),
        };
        assert_eq!(err.to_string(), "course name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: name is required");
    }
}
