//! # tally-core: Pure Domain Logic for Tally
//!
//! Domain types and rules for tracking course participants and their points.
//! Nothing in this crate touches the database, the file system or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (external)                         │   │
//! │  │    Course list ──► Participant tiles ──► "+1 point" tap         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON intents / snapshots               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/tally                                   │   │
//! │  │    add_course, add_participant, add_point, select_course        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │   types (Course, Participant, Point, ParticipantScore)          │   │
//! │  │   validation (names)   layout (tile columns)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-db (Database Layer)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types and the participants-by-course grouping
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules for names
//! - [`layout`] - Tile column math for the participant grid
//!
//! ## Example
//!
//! ```rust
//! use tally_core::layout::TileLayout;
//!
//! let layout = TileLayout::default();
//! // 100px tiles with a 20px gutter: 500px fits four columns
//! assert_eq!(layout.columns_for_width(500.0), 4);
//! ```

pub mod error;
pub mod layout;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use layout::TileLayout;
pub use types::*;

/// Maximum length of a course or participant name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;
