//! # Configuration
//!
//! Global user configuration stored at `~/.config/todostack/config` (TOML).
//! A missing file simply yields defaults. The `TODO_DB` environment variable
//! overrides the configured database path for one invocation.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, CONFIG_FILENAME, DB_PATH_ENV, DEFAULT_DB_FILENAME};

thread_local! {
    /// Thread-local override for the config/data base directory.
    /// Used by tests to redirect configuration to a temp directory without
    /// modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the config/data base directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Path to the SQLite database file.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Whether to use colored output (still requires a TTY). Default: true.
    #[serde(default)]
    pub color: Option<bool>,
}

impl GlobalConfig {
    /// Loads the global config, returning defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Returns the path of the global config file, honoring the test
    /// override.
    pub fn config_path() -> Option<PathBuf> {
        let base = home_override().or_else(dirs::config_dir)?;
        Some(base.join(APP_DIR).join(CONFIG_FILENAME))
    }

    /// Resolves the database path.
    ///
    /// Order: `TODO_DB` env var, configured `database_path`, the user data
    /// directory, then `todos.db` in the current directory.
    pub fn database_path(&self) -> PathBuf {
        if let Ok(env_path) = std::env::var(DB_PATH_ENV) {
            if !env_path.is_empty() {
                return PathBuf::from(env_path);
            }
        }

        if let Some(ref path) = self.database_path {
            return path.clone();
        }

        home_override()
            .or_else(dirs::data_dir)
            .map_or_else(
                || PathBuf::from(DEFAULT_DB_FILENAME),
                |dir| dir.join(APP_DIR).join(DEFAULT_DB_FILENAME),
            )
    }

    /// Whether color output is allowed by configuration.
    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
