//! # Errors
//!
//! Typed error taxonomy for todostack.
//!
//! Handlers raise these locally; the dispatcher's `execute` boundary is the
//! only place that renders them into user-facing messages and exit codes.

/// Errors produced by repository operations and command handlers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller-supplied input violates a precondition (missing/empty/malformed
    /// argument, bad filter name, unknown help target, already-completed item).
    #[error("{0}")]
    Validation(String),

    /// A referenced item id is well-formed but does not exist.
    #[error("Todo item with ID {0} not found")]
    NotFound(i64),

    /// The underlying store could not complete an operation.
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),
}

impl Error {
    /// Shorthand for a validation failure with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound(999);
        assert_eq!(err.to_string(), "Todo item with ID 999 not found");
    }

    #[test]
    fn test_validation_message_passthrough() {
        let err = Error::validation("Title cannot be empty");
        assert_eq!(err.to_string(), "Title cannot be empty");
    }
}
