//! # Constants
//!
//! Centralized constants for magic values used throughout todostack.

// =============================================================================
// Storage
// =============================================================================

/// Environment variable that overrides the database path.
pub const DB_PATH_ENV: &str = "TODO_DB";

/// Default database file name (used inside the data directory, and as the
/// last-resort fallback in the current directory).
pub const DEFAULT_DB_FILENAME: &str = "todos.db";

/// Application directory name (inside the user's config and data directories).
pub const APP_DIR: &str = "todostack";

/// Global configuration file name (inside `APP_DIR`).
pub const CONFIG_FILENAME: &str = "config";

// =============================================================================
// UI Display
// =============================================================================

/// Width of the separator line in list and help output.
pub const UI_SEPARATOR_LEN: usize = 40;

/// Human-readable timestamp format for item display (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
