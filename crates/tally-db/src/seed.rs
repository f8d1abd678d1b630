//! # Demo Seeding
//!
//! First-launch fixture data: one course, twenty participants and a random
//! handful of backdated points for each of them.
//!
//! ## Atomicity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    seed_demo_if_empty                                   │
//! │                                                                         │
//! │  SeedPlan::generate(rng, now)   ← all randomness, no I/O               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │  INSERT INTO courses (name)                                            │
//! │       SELECT 'Demokurs' WHERE NOT EXISTS (SELECT 1 FROM courses)       │
//! │       │                                                                 │
//! │       ├── no row inserted ──► ROLLBACK, SeedOutcome::Skipped           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  20 × INSERT participant, 1..=10 × INSERT point each                   │
//! │  COMMIT                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The emptiness check is part of the first write, so a second startup or a
//! racing second seeder inserts nothing, and a crash mid-seed leaves no
//! partial fixture behind.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use tally_core::CourseId;

/// Name of the fixture course.
pub const DEMO_COURSE_NAME: &str = "Demokurs";

/// Fixture participant names.
pub const DEMO_PARTICIPANTS: [&str; 20] = [
    "Fiona", "George", "Henry", "Isabella", "Jack", "Katherine", "Leon", "Mia", "Noah", "Olivia",
    "Paul", "Quinn", "Rachel", "Sophia", "Thomas", "Uma", "Victor", "William", "Xander", "Yara",
];

/// Fewest points a fixture participant starts with.
pub const MIN_DEMO_POINTS: usize = 1;

/// Most points a fixture participant starts with.
pub const MAX_DEMO_POINTS: usize = 10;

/// Earliest backdated point timestamp: 2024-01-01 00:00:00 UTC.
pub fn demo_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

// =============================================================================
// Seed Plan
// =============================================================================

/// One fixture participant and the timestamps of their points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedParticipant {
    pub name: &'static str,
    pub points: Vec<NaiveDateTime>,
}

/// The complete fixture, generated up front so the database work holds no
/// random number generator across awaits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub course_name: &'static str,
    pub participants: Vec<SeedParticipant>,
}

impl SeedPlan {
    /// Draws point counts in `[MIN_DEMO_POINTS, MAX_DEMO_POINTS]` and
    /// timestamps uniformly between [`demo_epoch`] and `now`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> Self {
        let epoch = demo_epoch();
        let span_secs = (now - epoch).num_seconds().max(0);

        let participants = DEMO_PARTICIPANTS
            .iter()
            .map(|name| {
                let count = rng.gen_range(MIN_DEMO_POINTS..=MAX_DEMO_POINTS);
                let points = (0..count)
                    .map(|_| epoch + Duration::seconds(rng.gen_range(0..=span_secs)))
                    .collect();
                SeedParticipant { name, points }
            })
            .collect();

        SeedPlan {
            course_name: DEMO_COURSE_NAME,
            participants,
        }
    }

    /// Total number of points in the plan.
    pub fn point_count(&self) -> usize {
        self.participants.iter().map(|p| p.points.len()).sum()
    }
}

// =============================================================================
// Seeding
// =============================================================================

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// At least one course already existed; nothing was written.
    Skipped,

    /// The fixture was written in full.
    Seeded {
        course_id: CourseId,
        participants: usize,
        points: usize,
    },
}

pub(crate) async fn seed_demo_if_empty(pool: &SqlitePool, plan: SeedPlan) -> DbResult<SeedOutcome> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    let course_id: Option<CourseId> = sqlx::query_scalar(
        r#"
        INSERT INTO courses (name)
        SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM courses)
        RETURNING id
        "#,
    )
    .bind(plan.course_name)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(course_id) = course_id else {
        tx.rollback()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;
        debug!("Courses already present, skipping demo seed");
        return Ok(SeedOutcome::Skipped);
    };

    for participant in &plan.participants {
        let participant_id: i64 = sqlx::query_scalar(
            "INSERT INTO participants (name, course_id) VALUES (?1, ?2) RETURNING id",
        )
        .bind(participant.name)
        .bind(course_id)
        .fetch_one(&mut *tx)
        .await?;

        for timestamp in &participant.points {
            sqlx::query("INSERT INTO points (participant_id, timestamp) VALUES (?1, ?2)")
                .bind(participant_id)
                .bind(*timestamp)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    let outcome = SeedOutcome::Seeded {
        course_id,
        participants: plan.participants.len(),
        points: plan.point_count(),
    };
    info!(?outcome, "Demo data seeded");
    Ok(outcome)
}
