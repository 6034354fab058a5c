//! # Command Dispatcher
//!
//! Validates a [`ParsedCommand`] against each verb's contract, invokes the
//! repository, and renders the outcome. Handlers raise typed errors; the
//! single [`CliHandler::execute`] boundary converts every failure into a
//! one-line message and exit code 1. Validation always happens before any
//! mutating storage call, so a failed operation leaves no partial state.

use crate::{
    error::{Error, Result},
    item::TodoItem,
    parser::{self, ParsedCommand, Verb},
    repository::TodoRepository,
    ui::Formatter,
};

/// Executes parsed commands against a repository and renders results.
pub struct CliHandler<'a> {
    repository: TodoRepository<'a>,
    formatter: Formatter,
}

impl<'a> CliHandler<'a> {
    /// Creates a handler with an injected formatter.
    pub const fn new(repository: TodoRepository<'a>, formatter: Formatter) -> Self {
        Self {
            repository,
            formatter,
        }
    }

    /// Returns the formatter used for output rendering.
    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Runs a command to completion, printing output and returning the exit
    /// code: 0 for any successful outcome (including "no results"), 1 for
    /// validation, not-found, storage, or unknown-verb failures.
    pub fn execute(&self, cmd: &ParsedCommand) -> i32 {
        // `<verb> --help` works uniformly without per-handler special cases.
        if (cmd.has_flag("help") || cmd.has_flag("h"))
            && cmd.verb != Verb::Help
            && cmd.verb != Verb::Unknown
        {
            println!("{}", self.verb_help(cmd.verb));
            return 0;
        }

        if cmd.verb == Verb::Unknown {
            // No handler to invoke; rendered directly rather than via the
            // error path.
            println!(
                "{}",
                self.formatter
                    .error("Unknown command. Use 'todo help' for usage information.")
            );
            return 1;
        }

        let outcome = match cmd.verb {
            Verb::Add => self.handle_add(&cmd.args),
            Verb::List => self.handle_list(&cmd.args),
            Verb::Complete => self.handle_complete(&cmd.args),
            Verb::Delete => self.handle_delete(&cmd.args),
            Verb::Search => self.handle_search(&cmd.args),
            Verb::Help => self.handle_help(&cmd.args),
            Verb::Version => self.handle_version(),
            Verb::Unknown => unreachable!("handled above"),
        };

        match outcome {
            Ok(output) => {
                println!("{output}");
                0
            }
            Err(Error::Storage(err)) => {
                println!(
                    "{}",
                    self.formatter.error(&format!("Database error: {err}"))
                );
                1
            }
            Err(err) => {
                println!("{}", self.formatter.error(&err.to_string()));
                1
            }
        }
    }

    /// `add <title> [description]`
    pub fn handle_add(&self, args: &[String]) -> Result<String> {
        require_args(args, "Title is required. Usage: add <title> [description]")?;

        let title = &args[0];
        let description = args.get(1).cloned().unwrap_or_default();

        // An explicitly-passed empty title is distinct from a missing one.
        if title.is_empty() {
            return Err(Error::validation("Title cannot be empty"));
        }

        let item = self
            .repository
            .create(&TodoItem::new(title.clone(), description))?;

        Ok(format!(
            "{}\n\n{}",
            self.formatter.success("Todo item created successfully"),
            self.formatter.todo_item(&item, true)
        ))
    }

    /// `list [all|completed|pending]`
    pub fn handle_list(&self, args: &[String]) -> Result<String> {
        let filter = args.first().map_or("all", String::as_str);

        let items = match filter {
            "all" => self.repository.find_all()?,
            "completed" => self.repository.find_completed()?,
            "pending" => self.repository.find_pending()?,
            _ => {
                return Err(Error::validation(
                    "Invalid filter. Use: all, completed, or pending",
                ))
            }
        };

        Ok(self.formatter.todo_list(&items, false))
    }

    /// `complete <id>`
    pub fn handle_complete(&self, args: &[String]) -> Result<String> {
        require_args(args, "Todo ID is required. Usage: complete <id>")?;

        let id = parse_id(&args[0])?;

        let mut item = self.repository.find_by_id(id)?.ok_or(Error::NotFound(id))?;

        if item.completed {
            return Err(Error::validation("Todo item is already completed"));
        }

        item.completed = true;
        self.repository.update(&item)?;

        Ok(format!(
            "{}\n\n{}",
            self.formatter.success("Todo item marked as completed"),
            self.formatter.todo_item(&item, true)
        ))
    }

    /// `delete <id>`
    pub fn handle_delete(&self, args: &[String]) -> Result<String> {
        require_args(args, "Todo ID is required. Usage: delete <id>")?;

        let id = parse_id(&args[0])?;

        // Looked up first so the removed item can be echoed back.
        let item = self.repository.find_by_id(id)?.ok_or(Error::NotFound(id))?;

        self.repository.remove(id)?;

        Ok(format!(
            "{}\n\n{}",
            self.formatter.success("Todo item deleted successfully"),
            self.formatter.todo_item(&item, true)
        ))
    }

    /// `search <query>`
    pub fn handle_search(&self, args: &[String]) -> Result<String> {
        require_args(args, "Search query is required. Usage: search <query>")?;

        let query = &args[0];
        if query.is_empty() {
            return Err(Error::validation("Search query cannot be empty"));
        }

        let items = self.repository.find_by_title(query)?;

        if items.is_empty() {
            return Ok(self
                .formatter
                .info(&format!("No todo items found matching: {query}")));
        }

        Ok(format!(
            "{}\n{}\n\n{}",
            self.formatter.header(&format!("Search Results for: {query}")),
            self.formatter.separator(),
            self.formatter.todo_list(&items, false)
        ))
    }

    /// `help [command]`
    pub fn handle_help(&self, args: &[String]) -> Result<String> {
        let Some(target) = args.first() else {
            return Ok(parser::usage());
        };

        let verb = Verb::from_token(target);
        if verb == Verb::Unknown {
            return Err(Error::Validation(format!("Unknown command: {target}")));
        }

        Ok(self.verb_help(verb))
    }

    /// `version`
    pub fn handle_version(&self) -> Result<String> {
        Ok(format!(
            "{}\nVersion: {}.{}.{}\nBuild: {}",
            self.formatter.header("Todo List CLI"),
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR"),
            env!("CARGO_PKG_VERSION_PATCH"),
            env!("CARGO_PKG_VERSION"),
        ))
    }

    fn verb_help(&self, verb: Verb) -> String {
        format!(
            "{}\n{}\n\n{}",
            self.formatter
                .header(&format!("Help for: {}", verb.as_str())),
            self.formatter.separator(),
            verb.help()
        )
    }
}

/// Parses an id argument strictly: the whole string must be a base-10
/// integer, and the value must be positive. Every failure is a validation
/// error, never a not-found or a panic.
fn parse_id(id_str: &str) -> Result<i64> {
    let id = id_str.parse::<i64>().map_err(|err| {
        use std::num::IntErrorKind;
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Error::Validation(format!("ID is out of range: {id_str}"))
            }
            _ => Error::Validation(format!("Invalid ID format: {id_str}")),
        }
    })?;

    if id <= 0 {
        return Err(Error::validation("ID must be a positive number"));
    }

    Ok(id)
}

fn require_args(args: &[String], message: &str) -> Result<()> {
    if args.is_empty() {
        return Err(Error::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_id_rejects_partial_numeric() {
        let err = parse_id("42abc").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("Invalid ID format"));
    }

    #[test]
    fn test_parse_id_rejects_zero_and_negative() {
        for input in ["0", "-1"] {
            let err = parse_id(input).unwrap_err();
            assert_eq!(err.to_string(), "ID must be a positive number");
        }
    }

    #[test]
    fn test_parse_id_rejects_empty() {
        assert!(matches!(parse_id(""), Err(Error::Validation(_))));
    }

    #[test]
    fn test_parse_id_out_of_range_has_distinct_message() {
        let err = parse_id("99999999999999999999999999").unwrap_err();
        assert!(err.to_string().contains("ID is out of range"));
    }
}
