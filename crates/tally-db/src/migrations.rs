//! # Schema Manager
//!
//! Embedded SQL migrations that create the `courses`, `participants` and
//! `points` tables.
//!
//! ## How It Runs
//! ```text
//! App Startup
//!      │
//!      ▼
//! _sqlx_migrations exists? ── no ──► create it
//!      │
//!      ▼
//! 001_initial_schema.sql applied? ── yes ──► nothing to do
//!      │ no
//!      ▼
//! Run it in a transaction, record checksum
//! ```
//!
//! The migration SQL itself uses `CREATE TABLE IF NOT EXISTS`, so a store
//! created outside the migrator is picked up without errors.
//!
//! ## Adding New Migrations
//! 1. Add `migrations/NNN_description.sql` with the next sequence number
//! 2. Never edit an applied migration; add a new one instead

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Migrations embedded from `crates/tally-db/migrations` at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Ensures the schema exists.
///
/// Idempotent: safe to call on every start and repeatedly in one process.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)` for diagnostics.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, applied as usize))
}
