//! # Application State
//!
//! Root container owning the database handle and the view.
//!
//! ## Locking
//! The view sits behind a `tokio::sync::RwLock`. A refresh holds the write
//! lock across both queries, so a reader never sees courses from one load
//! and scores from another.

use chrono::Utc;
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::{debug, error, info};

use tally_db::{Database, DbResult, SeedOutcome, SeedPlan};

use super::view::{Snapshot, ViewState};
use crate::config::AppConfig;

/// Everything the intent handlers operate on.
#[derive(Debug)]
pub struct AppState {
    db: Database,
    view: RwLock<ViewState>,
}

impl AppState {
    /// Creates the state without touching storage.
    pub fn new(db: Database, config: &AppConfig) -> Self {
        AppState {
            db,
            view: RwLock::new(ViewState::new(config.tile_layout(), config.window_width)),
        }
    }

    /// Seeds demo data if enabled and loads the first snapshot.
    ///
    /// Neither step stops startup. A failed seed leaves whatever the store
    /// holds; a failed load leaves an empty view, and each later intent
    /// reports its own storage error.
    pub async fn initialize(db: Database, config: &AppConfig) -> Self {
        let state = Self::new(db, config);

        if config.seed_demo {
            let plan = SeedPlan::generate(&mut rand::thread_rng(), Utc::now().naive_utc());
            match state.db.seed_demo_if_empty(plan).await {
                Ok(SeedOutcome::Seeded { points, .. }) => {
                    info!(points, "Seeded demo course");
                }
                Ok(SeedOutcome::Skipped) => debug!("Store already has courses"),
                Err(e) => error!(error = %e, "Demo seeding failed"),
            }
        }

        if let Err(e) = state.refresh().await {
            error!(error = %e, "Initial load failed, starting with an empty view");
        }
        state
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Reloads courses and scores and replaces the view data.
    pub async fn refresh(&self) -> DbResult<()> {
        let mut view = self.view.write().await;

        let courses = self.db.courses().list().await?;
        let participants = self.db.participants().list_with_scores().await?;

        debug!(courses = courses.len(), "View refreshed");
        view.replace(courses, participants);
        Ok(())
    }

    /// Exclusive access for UI-only changes.
    pub async fn view_mut(&self) -> RwLockWriteGuard<'_, ViewState> {
        self.view.write().await
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.view.read().await.snapshot()
    }
}
