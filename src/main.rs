//! # todo CLI
//!
//! Entry point: parses the command line, wires the database, repository, and
//! formatter together, and exits with the dispatcher's code.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use todostack::{parser, CliHandler, Database, Error, Formatter, GlobalConfig, TodoRepository};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = parser::parse(&args);

    match run(&cmd) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if err.downcast_ref::<Error>().is_some_and(|e| matches!(e, Error::Storage(_))) {
                eprintln!("Please check that the database file is accessible and not corrupted.");
            }
            std::process::exit(1);
        }
    }
}

fn run(cmd: &parser::ParsedCommand) -> Result<i32> {
    let config = GlobalConfig::load()?;

    let db_path = config.database_path();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory: {}", parent.display()))?;
        }
    }

    let database = Database::open(&db_path)
        .with_context(|| format!("Cannot open database: {}", db_path.display()))?;
    let repository = TodoRepository::new(&database);

    let use_color = std::io::stdout().is_terminal() && config.color_enabled();
    let handler = CliHandler::new(repository, Formatter::new(use_color));

    Ok(handler.execute(cmd))
}
