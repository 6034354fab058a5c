//! # Formatter
//!
//! Renders items, lists, and categorized messages for terminal output.
//! Styling is applied only when color is enabled (TTY plus config); the
//! underlying text is identical either way, so scripts can grep the output.

use std::fmt::Write as _;

use owo_colors::{OwoColorize, Style};

use crate::{constants::UI_SEPARATOR_LEN, item::TodoItem};

/// Terminal output formatter with optional ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    use_color: bool,
}

impl Formatter {
    /// Creates a formatter; `use_color` enables ANSI styling.
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Whether color output is enabled.
    pub const fn color_enabled(&self) -> bool {
        self.use_color
    }

    /// Renders a single item as a display block: id, checkbox, title,
    /// optional description, and creation time.
    pub fn todo_item(&self, item: &TodoItem, show_description: bool) -> String {
        let mut out = String::new();

        let _ = write!(
            out,
            "{} ",
            self.paint(&format!("[{}]", item.id), Style::new().dimmed())
        );

        if item.completed {
            let _ = write!(
                out,
                "{} {}",
                self.paint("[✓]", Style::new().bright_green()),
                self.paint(&item.title, Style::new().dimmed())
            );
        } else {
            let _ = write!(
                out,
                "{} {}",
                self.paint("[ ]", Style::new().yellow()),
                self.paint(&item.title, Style::new().bold())
            );
        }

        if show_description && !item.description.is_empty() {
            let _ = write!(
                out,
                "\n    {}",
                self.paint(&item.description, Style::new().dimmed())
            );
        }

        let _ = write!(
            out,
            "\n    {}",
            self.paint(
                &format!("Created: {}", item.formatted_created_at()),
                Style::new().dimmed()
            )
        );

        out
    }

    /// Renders a list of items with pending/completed counts.
    ///
    /// An empty list renders as an informational message, not an error.
    pub fn todo_list(&self, items: &[TodoItem], show_description: bool) -> String {
        if items.is_empty() {
            return self.info("No todo items found.");
        }

        let completed = items.iter().filter(|item| item.completed).count();
        let pending = items.len() - completed;

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header("Todo Items"));
        let _ = writeln!(out, "{}\n", self.separator());

        let _ = write!(out, "{}", self.info(&format!("Total: {} items", items.len())));
        let _ = write!(
            out,
            " | {} | {}\n\n",
            self.paint(&format!("{pending} pending"), Style::new().yellow()),
            self.paint(&format!("{completed} completed"), Style::new().bright_green())
        );

        for item in items {
            let _ = write!(out, "{}\n\n", self.todo_item(item, show_description));
        }

        out.push_str(&self.separator());
        out
    }

    /// Success message: green check prefix.
    pub fn success(&self, message: &str) -> String {
        self.paint(&format!("✓ {message}"), Style::new().bright_green())
    }

    /// Error message: red cross prefix.
    pub fn error(&self, message: &str) -> String {
        self.paint(&format!("✗ Error: {message}"), Style::new().bright_red())
    }

    /// Warning message: yellow sign prefix.
    pub fn warning(&self, message: &str) -> String {
        self.paint(&format!("⚠ Warning: {message}"), Style::new().bright_yellow())
    }

    /// Informational message: blue prefix.
    pub fn info(&self, message: &str) -> String {
        self.paint(&format!("ℹ {message}"), Style::new().bright_blue())
    }

    /// Section header.
    pub fn header(&self, title: &str) -> String {
        self.paint(title, Style::new().bold().bright_cyan())
    }

    /// Horizontal separator line.
    pub fn separator(&self) -> String {
        "=".repeat(UI_SEPARATOR_LEN)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}
