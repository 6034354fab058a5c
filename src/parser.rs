//! # Command Parser
//!
//! Turns a raw argument vector into a structured [`ParsedCommand`]: a verb,
//! ordered positional arguments, and a flag map. Parsing is state-free and
//! never fails; unrecognized verbs become [`Verb::Unknown`] and are rejected
//! later by the dispatcher.

use std::collections::HashMap;

/// The operation selected by the first CLI token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verb {
    Add,
    List,
    Complete,
    Delete,
    Search,
    Help,
    Version,
    #[default]
    Unknown,
}

impl Verb {
    /// Maps a token to a verb, case-insensitively, via the alias table.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "add" | "a" | "new" => Self::Add,
            "list" | "l" | "ls" => Self::List,
            "complete" | "c" | "done" => Self::Complete,
            "delete" | "d" | "del" | "rm" => Self::Delete,
            "search" | "s" | "find" => Self::Search,
            "help" | "h" => Self::Help,
            "version" | "v" => Self::Version,
            _ => Self::Unknown,
        }
    }

    /// Canonical display name for the verb.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Complete => "complete",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Help => "help",
            Self::Version => "version",
            Self::Unknown => "unknown",
        }
    }

    /// Static usage blurb for the verb (aliases and examples included).
    pub const fn help(self) -> &'static str {
        match self {
            Self::Add => {
                "add <title> [description]\n\
                 \x20 Add a new todo item.\n\
                 \x20 Aliases: a, new\n\
                 \x20 Examples:\n\
                 \x20   todo add \"Buy groceries\"\n\
                 \x20   todo add \"Fix bug\" \"Fix the memory leak in parser\""
            }
            Self::List => {
                "list [filter]\n\
                 \x20 List todo items. Optional filter: all, completed, pending.\n\
                 \x20 Aliases: l, ls\n\
                 \x20 Examples:\n\
                 \x20   todo list\n\
                 \x20   todo list completed\n\
                 \x20   todo list pending"
            }
            Self::Complete => {
                "complete <id>\n\
                 \x20 Mark a todo item as completed.\n\
                 \x20 Aliases: c, done\n\
                 \x20 Examples:\n\
                 \x20   todo complete 1\n\
                 \x20   todo done 42"
            }
            Self::Delete => {
                "delete <id>\n\
                 \x20 Delete a todo item.\n\
                 \x20 Aliases: d, del, rm\n\
                 \x20 Examples:\n\
                 \x20   todo delete 1\n\
                 \x20   todo rm 42"
            }
            Self::Search => {
                "search <query>\n\
                 \x20 Search for todo items by title.\n\
                 \x20 Aliases: s, find\n\
                 \x20 Examples:\n\
                 \x20   todo search \"groceries\"\n\
                 \x20   todo find bug"
            }
            Self::Help => {
                "help [command]\n\
                 \x20 Display help information.\n\
                 \x20 Examples:\n\
                 \x20   todo help\n\
                 \x20   todo help add"
            }
            Self::Version => {
                "version\n\
                 \x20 Display version information.\n\
                 \x20 Example:\n\
                 \x20   todo version"
            }
            Self::Unknown => "Unknown command. Use 'todo help' for usage information.",
        }
    }
}

/// A fully parsed command line: verb, positional args, and flags.
#[derive(Debug, Clone, Default)]
pub struct ParsedCommand {
    /// The selected verb.
    pub verb: Verb,

    /// Positional arguments in the order they appeared.
    pub args: Vec<String>,

    /// Flags, keyed by name with leading dashes stripped. Boolean flags store
    /// the literal value `"true"`. Duplicate flags overwrite (last wins).
    pub options: HashMap<String, String>,
}

impl ParsedCommand {
    /// Returns true if the flag was present (with or without a value).
    pub fn has_flag(&self, flag: &str) -> bool {
        self.options.contains_key(flag)
    }

    /// Returns the value of a flag, if present.
    pub fn option(&self, option: &str) -> Option<&str> {
        self.options.get(option).map(String::as_str)
    }
}

/// Parses an argument vector (program name already removed).
///
/// Empty input defaults to [`Verb::Help`]. A leading `-h`/`--help` or
/// `-v`/`--version` overrides verb lookup entirely and discards the remaining
/// tokens. Otherwise the first token selects the verb and the rest are
/// scanned left to right: `-`-prefixed tokens become flags (consuming the
/// next token as a value when it is not itself a flag), everything else is a
/// positional argument.
pub fn parse(tokens: &[String]) -> ParsedCommand {
    let mut result = ParsedCommand::default();

    let Some(first) = tokens.first() else {
        result.verb = Verb::Help;
        return result;
    };

    // Universal overrides, checked before verb lookup.
    if first == "-h" || first == "--help" {
        result.verb = Verb::Help;
        return result;
    }
    if first == "-v" || first == "--version" {
        result.verb = Verb::Version;
        return result;
    }

    result.verb = Verb::from_token(first);

    let mut i = 1;
    while i < tokens.len() {
        let token = &tokens[i];

        if is_flag(token) {
            let name = strip_dashes(token);

            // A following non-flag token is this flag's value.
            if let Some(next) = tokens.get(i + 1).filter(|t| !is_flag(t)) {
                result.options.insert(name, next.clone());
                i += 2;
                continue;
            }

            result.options.insert(name, "true".to_string());
        } else {
            result.args.push(token.clone());
        }

        i += 1;
    }

    result
}

/// Full usage text: banner plus every verb's blurb in table order.
pub fn usage() -> String {
    let mut out = String::from(
        "Todo List - A simple command-line todo list manager\n\n\
         Usage: todo <command> [arguments] [options]\n\n\
         Commands:\n\n",
    );

    for verb in [
        Verb::Add,
        Verb::List,
        Verb::Complete,
        Verb::Delete,
        Verb::Search,
        Verb::Help,
        Verb::Version,
    ] {
        out.push_str(verb.help());
        out.push_str("\n\n");
    }

    out.pop();
    out
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

fn strip_dashes(token: &str) -> String {
    token.trim_start_matches('-').to_string()
}
