//! # Tally Application Library
//!
//! Startup wiring for the `tally` binary.
//!
//! ## Module Organization
//! ```text
//! tally/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── tally.toml + TALLY_* overrides
//! ├── bridge.rs       ◄─── JSON lines on stdin/stdout
//! ├── state/
//! │   ├── app.rs      ◄─── AppState (database + view)
//! │   └── view.rs     ◄─── ViewState and Snapshot
//! ├── commands/       ◄─── One function per intent
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod bridge;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use state::AppState;
use tally_db::{Database, DbConfig, DbResult};

/// Runs the application until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ─────────────────────────────────────────────►   │
/// │     • tracing-subscriber on stderr, RUST_LOG overrides the default      │
/// │                                                                         │
/// │  2. Load Configuration ─────────────────────────────────────────────►   │
/// │     • TALLY_CONFIG or the platform config dir, then TALLY_* vars        │
/// │                                                                         │
/// │  3. Connect to Database ────────────────────────────────────────────►   │
/// │     • SQLite with WAL mode; a schema failure is logged, not fatal       │
/// │                                                                         │
/// │  4. Initialize State ───────────────────────────────────────────────►   │
/// │     • Demo seed if the store is empty, first refresh                    │
/// │                                                                         │
/// │  5. Serve Intents ──────────────────────────────────────────────────►   │
/// │     • Initial snapshot, then one reply per intent                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Tally");

    let config_path = std::env::var("TALLY_CONFIG").ok().map(PathBuf::from);
    let config = AppConfig::load_or_default(config_path);

    let db_path = config.resolve_database_path()?;
    info!(?db_path, "Database path determined");

    let db = open_database(db_path).await.map_err(|e| {
        error!(error = %e, "Database connection failed");
        e
    })?;

    let state = AppState::initialize(db.clone(), &config).await;
    info!("State initialized");

    let result = bridge::serve(
        &state,
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await;

    db.close().await;
    result?;

    info!("Tally stopped");
    Ok(())
}

/// Opens the database file and ensures the schema.
///
/// Only a pool that cannot be opened is an error. A schema failure is
/// logged and the handle is returned anyway, so the application runs
/// degraded and each operation reports its own failure.
pub async fn open_database(path: PathBuf) -> DbResult<Database> {
    let db = Database::new(DbConfig::new(path).run_migrations(false)).await?;

    if let Err(e) = db.ensure_schema().await {
        error!(error = %e, "Schema setup failed, continuing degraded");
    } else {
        info!("Database connected and schema ensured");
    }

    Ok(db)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries the bridge protocol.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{dispatch, Intent, Reply};
    use crate::error::ErrorCode;

    /// A store holding a `courses` row whose migration record no longer
    /// matches the embedded schema.
    async fn store_with_bad_migration_record(path: &std::path::Path) {
        let db = Database::new(DbConfig::new(path).run_migrations(false))
            .await
            .unwrap();

        for sql in [
            "CREATE TABLE courses (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
            "INSERT INTO courses (name) VALUES ('Altbestand')",
            "CREATE TABLE _sqlx_migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                success BOOLEAN NOT NULL,
                checksum BLOB NOT NULL,
                execution_time BIGINT NOT NULL
            )",
            "INSERT INTO _sqlx_migrations (version, description, success, checksum, execution_time)
             VALUES (1, 'initial schema', 1, X'00', 0)",
        ] {
            sqlx::query(sql).execute(db.pool()).await.unwrap();
        }
        db.close().await;
    }

    #[tokio::test]
    async fn test_schema_failure_does_not_stop_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.db");
        store_with_bad_migration_record(&path).await;

        // The migrator rejects the modified record
        let strict = Database::new(DbConfig::new(&path)).await;
        assert!(matches!(strict, Err(tally_db::DbError::MigrationFailed(_))));

        let db = open_database(path).await.unwrap();
        let state = AppState::initialize(db, &AppConfig::default()).await;

        // The participants table is missing, so the first load fails
        assert!(state.snapshot().await.courses.is_empty());

        let err = dispatch(&state, Intent::Refresh).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);

        // Tables that exist still answer
        assert_eq!(state.db().courses().count().await.unwrap(), 1);

        let err = dispatch(&state, Intent::AddPoint { participant_id: 1 })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(matches!(
            dispatch(&state, Intent::TogglePaneVisibility).await,
            Ok(Reply::Snapshot(_))
        ));
    }
}
