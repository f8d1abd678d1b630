//! # Participant Repository
//!
//! Participants and their derived scores.
//!
//! ## Score Aggregation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  participants            points                                        │
//! │  ┌────┬───────┬────┐     ┌────┬────┐                                   │
//! │  │ id │ name  │ c  │     │ id │ p  │                                   │
//! │  ├────┼───────┼────┤     ├────┼────┤                                   │
//! │  │ 1  │ Alice │ 1  │◄────│ 1  │ 1  │                                   │
//! │  │ 2  │ Bob   │ 1  │  ┌──│ 2  │ 1  │                                   │
//! │  │ 3  │ Cleo  │ 2  │  │  └────┴────┘                                   │
//! │  └────┴───────┴────┘  │                                                │
//! │        LEFT JOIN ─────┘  GROUP BY participant                          │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  Alice 2, Bob 0, Cleo 0  ──► regroup by course_id                      │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  { 1: [Alice 2, Bob 0], 2: [Cleo 0] }                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The LEFT JOIN keeps participants without points at score 0. Scores are
//! recomputed on every call and never cached.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::{group_by_course, CourseId, Participant, ParticipantId, ParticipantScore, ParticipantsByCourse};

const SCORES_SELECT: &str = r#"
    SELECT
        p.id,
        p.name,
        p.course_id,
        COUNT(pt.id) AS score
    FROM participants p
    LEFT JOIN points pt ON pt.participant_id = p.id
"#;

/// Repository for participant database operations.
#[derive(Debug, Clone)]
pub struct ParticipantRepository {
    pool: SqlitePool,
}

impl ParticipantRepository {
    /// Creates a new ParticipantRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ParticipantRepository { pool }
    }

    /// Inserts a participant into a course.
    ///
    /// `course_id` is not looked up first. The foreign key rejects unknown
    /// courses with [`DbError::ForeignKeyViolation`](crate::DbError::ForeignKeyViolation).
    pub async fn insert(&self, course_id: CourseId, name: &str) -> DbResult<Participant> {
        debug!(course_id, name = %name, "Inserting participant");

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (name, course_id)
            VALUES (?1, ?2)
            RETURNING id, name, course_id
            "#,
        )
        .bind(name)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Gets a participant by its ID.
    pub async fn get_by_id(&self, id: ParticipantId) -> DbResult<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            "SELECT id, name, course_id FROM participants WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Lists every participant with its score, grouped by course.
    ///
    /// Participants inside a course are in insertion order. Courses without
    /// participants have no entry.
    pub async fn list_with_scores(&self) -> DbResult<ParticipantsByCourse> {
        let query = format!("{SCORES_SELECT} GROUP BY p.id ORDER BY p.id");

        let rows = sqlx::query_as::<_, ParticipantScore>(&query)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed participants with scores");
        Ok(group_by_course(rows))
    }

    /// Lists the participants of one course with their scores.
    pub async fn list_for_course(&self, course_id: CourseId) -> DbResult<Vec<ParticipantScore>> {
        let query = format!("{SCORES_SELECT} WHERE p.course_id = ?1 GROUP BY p.id ORDER BY p.id");

        let rows = sqlx::query_as::<_, ParticipantScore>(&query)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Counts all participants.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM participants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
