//! # Point Repository
//!
//! Awarding points. A point row is immutable once written and there is no
//! upper bound per participant.
//!
//! `add` is deliberately not idempotent: every call writes exactly one row,
//! so two taps on "+1" give two points.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::{ParticipantId, Point};

/// Repository for point database operations.
#[derive(Debug, Clone)]
pub struct PointRepository {
    pool: SqlitePool,
}

impl PointRepository {
    /// Creates a new PointRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PointRepository { pool }
    }

    /// Awards one point stamped with the current time.
    ///
    /// The timestamp comes from the column default (`CURRENT_TIMESTAMP`,
    /// UTC), so it reflects when SQLite wrote the row.
    pub async fn add(&self, participant_id: ParticipantId) -> DbResult<Point> {
        debug!(participant_id, "Adding point");

        let point = sqlx::query_as::<_, Point>(
            r#"
            INSERT INTO points (participant_id)
            VALUES (?1)
            RETURNING id, participant_id, timestamp
            "#,
        )
        .bind(participant_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(point)
    }

    /// Awards one point with an explicit UTC timestamp.
    pub async fn add_at(
        &self,
        participant_id: ParticipantId,
        timestamp: NaiveDateTime,
    ) -> DbResult<Point> {
        debug!(participant_id, %timestamp, "Adding backdated point");

        let point = sqlx::query_as::<_, Point>(
            r#"
            INSERT INTO points (participant_id, timestamp)
            VALUES (?1, ?2)
            RETURNING id, participant_id, timestamp
            "#,
        )
        .bind(participant_id)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(point)
    }

    /// Counts the points held by one participant.
    pub async fn count_for_participant(&self, participant_id: ParticipantId) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM points WHERE participant_id = ?1")
            .bind(participant_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Lists one participant's points, newest first.
    pub async fn list_for_participant(&self, participant_id: ParticipantId) -> DbResult<Vec<Point>> {
        let points = sqlx::query_as::<_, Point>(
            r#"
            SELECT id, participant_id, timestamp
            FROM points
            WHERE participant_id = ?1
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .bind(participant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(points)
    }

    /// Counts all points.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM points")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
