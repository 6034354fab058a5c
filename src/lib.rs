//! # todostack
//!
//! A simple, colorful command-line todo list manager backed by SQLite.
//!
//! ## Features
//!
//! - **Short aliases**: `a`/`add`/`new`, `l`/`ls`/`list`, `done`, `rm`, ...
//! - **SQLite storage**: one durable file, no daemon
//! - **Filtered listing**: all, completed, or pending items
//! - **Title search**: case-insensitive substring matching
//!
//! One process invocation parses exactly one command, runs it against the
//! store, prints output, and exits.

pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod item;
pub mod parser;
pub mod repository;
pub mod storage;
pub mod ui;

pub use config::{set_home_override, GlobalConfig};
pub use dispatcher::CliHandler;
pub use error::{Error, Result};
pub use item::TodoItem;
pub use parser::{parse, ParsedCommand, Verb};
pub use repository::TodoRepository;
pub use storage::Database;
pub use ui::Formatter;
