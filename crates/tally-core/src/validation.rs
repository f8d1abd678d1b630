//! # Validation Module
//!
//! Input rules applied before anything reaches the database.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Presentation (external)                                      │
//! │  └── Disables the "add" button for blank input                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (apps/tally)                                         │
//! │  └── THIS MODULE: trimmed, non-empty, bounded names                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository stores names exactly as it receives them, so callers pass
//! the trimmed value these functions return.

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a course name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_course_name;
///
/// assert_eq!(validate_course_name("  Biologie ").unwrap(), "Biologie");
/// assert!(validate_course_name("   ").is_err());
/// ```
pub fn validate_course_name(name: &str) -> ValidationResult<String> {
    validate_name("course name", name)
}

/// Validates a participant name and returns it trimmed.
pub fn validate_participant_name(name: &str) -> ValidationResult<String> {
    validate_name("participant name", name)
}

/// Validates a reported pane width in pixels.
///
/// Widths are measured by the presentation layer and must be finite and
/// non-negative.
pub fn validate_pane_width(width: f64) -> ValidationResult<f64> {
    validate_width("pane width", width)
}

/// Validates a reported window width in pixels.
pub fn validate_window_width(width: f64) -> ValidationResult<f64> {
    validate_width("window width", width)
}

fn validate_width(field: &str, width: f64) -> ValidationResult<f64> {
    if !width.is_finite() || width < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(u32::MAX),
        });
    }
    Ok(width)
}
