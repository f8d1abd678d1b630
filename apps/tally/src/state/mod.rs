//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  run()                                                                  │
//! │    └── AppState::initialize(db, &config)                                │
//! │            │                                                            │
//! │            ├── Database          (tally-db, cloned pool handle)         │
//! │            └── RwLock<ViewState> (courses, scores, selection, panes)    │
//! │                                                                         │
//! │  Commands borrow &AppState. Nothing lives in a global.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod view;

pub use app::AppState;
pub use view::{LayoutSnapshot, Snapshot, ViewState};
