//! # Test Harness
//!
//! Shared helpers for integration tests: an in-memory database with a ready
//! repository, plus small fixtures.

use todostack::{Database, TodoItem, TodoRepository};

/// Opens a fresh in-memory database.
pub fn test_db() -> Database {
    Database::open_in_memory().expect("in-memory database should open")
}

/// Creates an item with the given title and description, returning the
/// persisted copy (with its assigned id).
pub fn create_item(repo: &TodoRepository<'_>, title: &str, description: &str) -> TodoItem {
    repo.create(&TodoItem::new(title, description))
        .expect("create should succeed")
}

/// Creates an item and marks it completed.
#[allow(dead_code)] // not every test binary uses every helper
pub fn create_completed_item(repo: &TodoRepository<'_>, title: &str) -> TodoItem {
    let mut item = create_item(repo, title, "");
    item.completed = true;
    repo.update(&item).expect("update should succeed");
    item
}

/// Builds an owned argument vector from string literals.
#[allow(dead_code)]
pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}
