//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Course      │   │   Participant   │   │      Point      │       │
//! │  │  ─────────────  │◄──│  ─────────────  │◄──│  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  participant_id │       │
//! │  └─────────────────┘   │  course_id (FK) │   │  timestamp      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Derived:  ParticipantScore = Participant + COUNT(points)               │
//! │            ParticipantsByCourse = course_id → [ParticipantScore]        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are assigned by the database and never changed by the
//! application. A score is never stored; it is the point count at query time.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Storage-assigned identifier of a course.
pub type CourseId = i64;

/// Storage-assigned identifier of a participant.
pub type ParticipantId = i64;

// =============================================================================
// Course
// =============================================================================

/// A course that participants belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
}

// =============================================================================
// Participant
// =============================================================================

/// A participant enrolled in exactly one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub course_id: CourseId,
}

// =============================================================================
// Point
// =============================================================================

/// A single awarded point. Immutable once written.
///
/// `timestamp` is UTC without an offset, matching SQLite's
/// `CURRENT_TIMESTAMP` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Point {
    pub id: i64,
    pub participant_id: ParticipantId,
    #[ts(as = "String")]
    pub timestamp: NaiveDateTime,
}

// =============================================================================
// Participant With Score
// =============================================================================

/// A participant joined with the number of points they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParticipantScore {
    pub id: ParticipantId,
    pub name: String,
    pub course_id: CourseId,
    /// Count of point rows. Always >= 0.
    pub score: i64,
}

/// Participants with scores, keyed by course id.
///
/// A `BTreeMap` keeps course keys in id order so snapshots are stable.
pub type ParticipantsByCourse = BTreeMap<CourseId, Vec<ParticipantScore>>;

/// Regroups a flat participant list by `course_id`.
///
/// Relative order inside each course is preserved, so callers that pass rows
/// ordered by participant id get insertion-ordered groups.
///
/// ## Example
/// ```rust
/// use tally_core::{group_by_course, ParticipantScore};
///
/// let rows = vec![
///     ParticipantScore { id: 1, name: "Alice".into(), course_id: 1, score: 2 },
///     ParticipantScore { id: 2, name: "Bob".into(), course_id: 2, score: 0 },
///     ParticipantScore { id: 3, name: "Cleo".into(), course_id: 1, score: 5 },
/// ];
///
/// let grouped = group_by_course(rows);
/// assert_eq!(grouped[&1].len(), 2);
/// assert_eq!(grouped[&2][0].name, "Bob");
/// ```
pub fn group_by_course(rows: Vec<ParticipantScore>) -> ParticipantsByCourse {
    let mut grouped = ParticipantsByCourse::new();
    for row in rows {
        grouped.entry(row.course_id).or_default().push(row);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
