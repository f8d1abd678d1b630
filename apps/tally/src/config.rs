//! # Application Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TALLY_DB_PATH=/data/tally.db                                       │
//! │     TALLY_SEED_DEMO=false                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/org.tally.tally/tally.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     <data dir>/tally.db, demo seeding on, 100px tiles                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! database_path = "/home/me/tally.db"
//! seed_demo = true
//! tile_size = 100.0
//! tile_gutter = 20.0
//! large_screen_min_width = 768.0
//! window_width = 1024.0
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use tally_core::layout::{
    TileLayout, DEFAULT_LARGE_SCREEN_MIN_WIDTH, DEFAULT_TILE_GUTTER, DEFAULT_TILE_SIZE,
};

/// Database file name inside the platform data directory.
pub const DATABASE_FILE_NAME: &str = "tally.db";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "tally.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Could not determine app data directory")]
    NoDataDir,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database file. `None` means `<data dir>/tally.db`.
    pub database_path: Option<PathBuf>,

    /// Insert the demo course on first launch.
    pub seed_demo: bool,

    /// Participant tile edge length in pixels.
    pub tile_size: f64,

    /// Margin plus padding around each tile in pixels.
    pub tile_gutter: f64,

    /// Window width at which the course list is shown beside the tiles.
    pub large_screen_min_width: f64,

    /// Initial window width until the presentation layer reports one.
    pub window_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: None,
            seed_demo: true,
            tile_size: DEFAULT_TILE_SIZE,
            tile_gutter: DEFAULT_TILE_GUTTER,
            large_screen_min_width: DEFAULT_LARGE_SCREEN_MIN_WIDTH,
            window_width: 1024.0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`tally.toml`), if present
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates value ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::Invalid("tile_size must be greater than 0".into()));
        }
        if !(self.tile_gutter.is_finite() && self.tile_gutter >= 0.0) {
            return Err(ConfigError::Invalid("tile_gutter must not be negative".into()));
        }
        if !(self.large_screen_min_width.is_finite() && self.large_screen_min_width >= 0.0) {
            return Err(ConfigError::Invalid(
                "large_screen_min_width must not be negative".into(),
            ));
        }
        if !(self.window_width.is_finite() && self.window_width >= 0.0) {
            return Err(ConfigError::Invalid("window_width must not be negative".into()));
        }
        Ok(())
    }

    /// Applies `TALLY_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("TALLY_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup("TALLY_SEED_DEMO") {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed_demo = true,
                "0" | "false" | "no" | "off" => self.seed_demo = false,
                _ => warn!(value = %value, "Unknown TALLY_SEED_DEMO value"),
            }
        }

        let number = |key: &str| -> Option<f64> {
            let raw = lookup(key)?;
            match raw.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(key, value = %raw, "Ignoring non-numeric override");
                    None
                }
            }
        };

        if let Some(v) = number("TALLY_TILE_SIZE") {
            self.tile_size = v;
        }
        if let Some(v) = number("TALLY_TILE_GUTTER") {
            self.tile_gutter = v;
        }
        if let Some(v) = number("TALLY_LARGE_SCREEN_MIN_WIDTH") {
            self.large_screen_min_width = v;
        }
        if let Some(v) = number("TALLY_WINDOW_WIDTH") {
            self.window_width = v;
        }
    }

    /// Tile geometry for the participant grid.
    pub fn tile_layout(&self) -> TileLayout {
        TileLayout {
            tile_size: self.tile_size,
            tile_gutter: self.tile_gutter,
            large_screen_min_width: self.large_screen_min_width,
        }
    }

    /// Resolves the database file, creating the data directory if needed.
    pub fn resolve_database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "tally", "tally")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.seed_demo);
        assert!(config.database_path.is_none());
        assert_eq!(config.tile_layout(), TileLayout::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup_from(&[
            ("TALLY_DB_PATH", "/tmp/x.db"),
            ("TALLY_SEED_DEMO", "off"),
            ("TALLY_TILE_SIZE", "80"),
            ("TALLY_WINDOW_WIDTH", "not-a-number"),
        ]));

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/x.db")));
        assert!(!config.seed_demo);
        assert_eq!(config.tile_size, 80.0);
        assert_eq!(config.window_width, 1024.0);
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.tile_size = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.tile_gutter = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "seed_demo = false\ntile_gutter = 10.0\n").unwrap();

        let mut config: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        config.apply_overrides(|_| None);

        assert!(!config.seed_demo);
        assert_eq!(config.tile_gutter, 10.0);
        // Unset keys keep their defaults
        assert_eq!(config.tile_size, DEFAULT_TILE_SIZE);
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = AppConfig {
            database_path: Some(PathBuf::from("/srv/tally/tally.db")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolve_database_path().unwrap(),
            PathBuf::from("/srv/tally/tally.db")
        );
    }

    #[test]
    fn test_toml_round_trip_keys() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("seed_demo = true"));
        assert!(toml_str.contains("tile_size"));
    }
}
