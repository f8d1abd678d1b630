//! # Repository Module
//!
//! Database repository implementations for Tally.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command (apps/tally)                                                  │
//! │       │                                                                 │
//! │       │  db.points().add(participant_id)                               │
//! │       ▼                                                                 │
//! │  PointRepository                                                       │
//! │  ├── add(&self, participant_id)                                        │
//! │  ├── count_for_participant(&self, participant_id)                      │
//! │  └── list_for_participant(&self, participant_id)                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation returns a [`DbResult`](crate::error::DbResult). Nothing is
//! swallowed here; the caller decides whether to surface, retry or ignore.
//!
//! ## Available Repositories
//!
//! - [`course::CourseRepository`] - Course inserts and listing
//! - [`participant::ParticipantRepository`] - Participants and score aggregates
//! - [`point::PointRepository`] - Awarding and counting points

pub mod course;
pub mod participant;
pub mod point;
