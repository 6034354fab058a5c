//! # Repository
//!
//! CRUD and query operations over persisted todo items.
//!
//! Every query that returns multiple items orders by creation time, newest
//! first, with ties broken by insertion order. Absence of a row is modeled as
//! `Option::None`, never as an error; storage problems surface as
//! [`Error::Storage`](crate::error::Error).

use rusqlite::{params, OptionalExtension, Params, Row};

use crate::{error::Result, item::TodoItem, storage::Database};

const ITEM_COLUMNS: &str = "id, title, description, completed, created_at";

/// Repository of todo items backed by a [`Database`].
#[derive(Debug)]
pub struct TodoRepository<'a> {
    db: &'a Database,
}

impl<'a> TodoRepository<'a> {
    /// Creates a repository over the given database.
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Persists a new item and returns a copy with its assigned id.
    ///
    /// The input item's id is ignored; the store always assigns a fresh one.
    pub fn create(&self, item: &TodoItem) -> Result<TodoItem> {
        self.db.conn().execute(
            "INSERT INTO todos (title, description, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                item.title,
                item.description,
                item.completed,
                item.created_at_unix()
            ],
        )?;

        let mut created = item.clone();
        created.id = self.db.conn().last_insert_rowid();
        Ok(created)
    }

    /// Looks up a single item by id. Absence is `None`, not an error.
    pub fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM todos WHERE id = ?1");
        let item = self
            .db
            .conn()
            .query_row(&sql, params![id], read_item)
            .optional()?;
        Ok(item)
    }

    /// Returns all items, newest first.
    pub fn find_all(&self) -> Result<Vec<TodoItem>> {
        self.select(
            &format!("SELECT {ITEM_COLUMNS} FROM todos ORDER BY created_at DESC, id"),
            [],
        )
    }

    /// Returns completed items, newest first.
    pub fn find_completed(&self) -> Result<Vec<TodoItem>> {
        self.select(
            &format!(
                "SELECT {ITEM_COLUMNS} FROM todos WHERE completed = 1 ORDER BY created_at DESC, id"
            ),
            [],
        )
    }

    /// Returns pending items, newest first.
    pub fn find_pending(&self) -> Result<Vec<TodoItem>> {
        self.select(
            &format!(
                "SELECT {ITEM_COLUMNS} FROM todos WHERE completed = 0 ORDER BY created_at DESC, id"
            ),
            [],
        )
    }

    /// Case-insensitive substring search against titles, newest first.
    ///
    /// An empty query matches every row; rejecting empty queries is the
    /// dispatcher's job, not the repository's.
    pub fn find_by_title(&self, query: &str) -> Result<Vec<TodoItem>> {
        let pattern = format!("%{query}%");
        self.select(
            &format!(
                "SELECT {ITEM_COLUMNS} FROM todos WHERE title LIKE ?1 ORDER BY created_at DESC, id"
            ),
            params![pattern],
        )
    }

    /// Replaces title/description/completed for the row matching `item.id`.
    ///
    /// Returns whether a row was affected. `created_at` is never modified.
    pub fn update(&self, item: &TodoItem) -> Result<bool> {
        let changes = self.db.conn().execute(
            "UPDATE todos SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4",
            params![item.title, item.description, item.completed, item.id],
        )?;
        Ok(changes > 0)
    }

    /// Deletes an item by id. Returns whether a row existed.
    pub fn remove(&self, id: i64) -> Result<bool> {
        let changes = self
            .db
            .conn()
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(changes > 0)
    }

    /// Total number of items.
    pub fn count(&self) -> Result<i64> {
        self.count_where("SELECT COUNT(*) FROM todos")
    }

    /// Number of completed items.
    pub fn count_completed(&self) -> Result<i64> {
        self.count_where("SELECT COUNT(*) FROM todos WHERE completed = 1")
    }

    /// Number of pending items.
    pub fn count_pending(&self) -> Result<i64> {
        self.count_where("SELECT COUNT(*) FROM todos WHERE completed = 0")
    }

    fn select<P: Params>(&self, sql: &str, params: P) -> Result<Vec<TodoItem>> {
        let mut stmt = self.db.conn().prepare(sql)?;
        let items = stmt
            .query_map(params, read_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    fn count_where(&self, sql: &str) -> Result<i64> {
        let count = self.db.conn().query_row(sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

fn read_item(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem::from_parts(
        row.get(0)?,
        row.get(1)?,
        row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        row.get(3)?,
        TodoItem::from_unix_time(row.get(4)?),
    ))
}
