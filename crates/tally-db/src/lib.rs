//! # tally-db: Database Layer for Tally
//!
//! SQLite storage for courses, participants and points, accessed through
//! sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command (add_point)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tally-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌─────────────┐  │   │
//! │  │   │   Database    │    │   Repositories    │  │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ CourseRepository  │  │ 001_initial │  │   │
//! │  │   │  SqlitePool   │    │ ParticipantRepo   │  │ _schema.sql │  │   │
//! │  │   │               │    │ PointRepository   │  │             │  │   │
//! │  │   └───────────────┘    └───────────────────┘  └─────────────┘  │   │
//! │  │                        seed.rs (first launch)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tally.db (single file, WAL)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("tally.db")).await?;
//! let course = db.courses().insert("Mathematik").await?;
//! let alice = db.participants().insert(course.id, "Alice").await?;
//! db.points().add(alice.id).await?;
//!
//! let by_course = db.participants().list_with_scores().await?;
//! assert_eq!(by_course[&course.id][0].score, 1);
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use seed::{SeedOutcome, SeedPlan};

pub use repository::course::CourseRepository;
pub use repository::participant::ParticipantRepository;
pub use repository::point::PointRepository;
