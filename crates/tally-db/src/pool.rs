//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Pool                           │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure pool settings                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Create pool + ensure schema             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.courses() / db.participants() / db.points()                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqlitePool (tally.db, WAL mode, foreign keys ON)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! Readers don't block the writer, so a refresh can run while a point is
//! being written. SQLite owns all locking; the application takes none.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::course::CourseRepository;
use crate::repository::participant::ParticipantRepository;
use crate::repository::point::PointRepository;
use crate::seed::{self, SeedOutcome, SeedPlan};

/// Path value that selects a private in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/tally.db")
///     .max_connections(4)
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// How long to wait for a free connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// How long SQLite waits on a locked database before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether to ensure the schema on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration for the database file at `path`.
    /// The file is created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// An in-memory database lives as long as its one connection, so the
    /// pool is pinned to a single connection that never idles out.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the SQLite busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether to ensure the schema on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Whether this configuration points at a private in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let base = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
        };

        Ok(base
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // SQLite has foreign keys disabled by default
            .foreign_keys(true)
            .busy_timeout(self.busy_timeout))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the connection pool and, if enabled, ensures the schema.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;
        debug!("Connection options configured");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout);

        if config.is_in_memory() {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "Database pool created");

        let db = Database { pool };

        if config.run_migrations {
            db.ensure_schema().await?;
        }

        Ok(db)
    }

    /// Creates the three tables if they are absent. Idempotent.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the course repository.
    pub fn courses(&self) -> CourseRepository {
        CourseRepository::new(self.pool.clone())
    }

    /// Returns the participant repository.
    pub fn participants(&self) -> ParticipantRepository {
        ParticipantRepository::new(self.pool.clone())
    }

    /// Returns the point repository.
    pub fn points(&self) -> PointRepository {
        PointRepository::new(self.pool.clone())
    }

    /// Writes `plan` if no course exists yet.
    ///
    /// See [`crate::seed`] for the fixture contents and atomicity rules.
    pub async fn seed_demo_if_empty(&self, plan: SeedPlan) -> DbResult<SeedOutcome> {
        seed::seed_demo_if_empty(&self.pool, plan).await
    }

    /// Closes the connection pool. Later repository calls fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks that the database answers a trivial query.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_names(db: &Database) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name IN ('courses', 'participants', 'points') \
             ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert_eq!(table_names(&db).await, vec!["courses", "participants", "points"]);
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        assert_eq!(table_names(&db).await.len(), 3);
        let (total, applied) = migrations::migration_status(db.pool()).await.unwrap();
        assert_eq!(total, applied);
    }

    #[tokio::test]
    async fn test_schema_created_without_migrator_is_accepted() {
        let config = DbConfig::in_memory().run_migrations(false);
        let db = Database::new(config).await.unwrap();

        sqlx::query("CREATE TABLE courses (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)")
            .execute(db.pool())
            .await
            .unwrap();

        db.ensure_schema().await.unwrap();
        assert_eq!(table_names(&db).await.len(), 3);
    }

    #[tokio::test]
    async fn test_file_database_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.courses().insert("Biologie").await.unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let courses = db.courses().list().await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Biologie");
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/tally.db")
            .max_connections(10)
            .min_connections(2)
            .busy_timeout(Duration::from_millis(250));

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }
}
