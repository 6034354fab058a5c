//! # Item
//!
//! Represents one todo item and its timestamp conversions.
//!
//! No validation lives here; the dispatcher rejects bad input before an item
//! is ever constructed. The model only guarantees that every field always has
//! a defined value.

use chrono::{DateTime, Local, Utc};

use crate::constants::TIMESTAMP_FORMAT;

/// A single todo item.
///
/// An `id` of `0` means the item has not been persisted yet; the store
/// assigns the real id on insert. `created_at` is set once at creation and
/// persists as whole epoch seconds (sub-second precision is discarded by
/// design).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Unique id assigned by the store (`0` = not yet persisted).
    pub id: i64,

    /// Item title.
    pub title: String,

    /// Optional longer description (may be empty).
    pub description: String,

    /// Completion state.
    pub completed: bool,

    /// Creation timestamp (UTC). Immutable after creation.
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a fresh, not-yet-persisted item with the current timestamp.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Reconstructs an item from stored fields.
    pub fn from_parts(
        id: i64,
        title: String,
        description: String,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
            created_at,
        }
    }

    /// Returns the creation time as whole seconds since the Unix epoch.
    pub fn created_at_unix(&self) -> i64 {
        self.created_at.timestamp()
    }

    /// Converts stored epoch seconds back into a timestamp.
    pub fn from_unix_time(unix_time: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(unix_time, 0).unwrap_or_default()
    }

    /// Renders the creation time as `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn formatted_created_at(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = TodoItem::new("Buy milk", "");
        assert_eq!(item.id, 0);
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.description, "");
        assert!(!item.completed);
    }

    #[test]
    fn test_unix_round_trip_truncates_to_seconds() {
        let item = TodoItem::new("Task", "Desc");
        let secs = item.created_at_unix();
        let restored = TodoItem::from_unix_time(secs);
        assert_eq!(restored.timestamp(), secs);
        assert_eq!(restored.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_formatted_created_at_shape() {
        let item = TodoItem::from_parts(
            1,
            "Task".to_string(),
            String::new(),
            false,
            TodoItem::from_unix_time(1_700_000_000),
        );
        let formatted = item.formatted_created_at();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }
}
