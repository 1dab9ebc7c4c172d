//! Input validation for mutation and listing arguments.
//!
//! Everything here runs before the store is touched, so a rejected request
//! never leaves a partial write behind.

use crate::error::{Result, TodoError};
use crate::model::TodoStatus;

/// Maximum allowed length for a todo's text.
pub const MAX_TEXT_LENGTH: usize = 1_000;

/// Validates todo text for `addTodo` and `renameTodo`. Whitespace-only text
/// counts as empty; the limit is in characters, not bytes.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TodoError::Validation("Text cannot be empty".to_string()));
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(TodoError::Validation(format!(
            "Text exceeds maximum length of {} characters",
            MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Validates the `first` pagination argument.
pub fn validate_first(first: Option<i32>) -> Result<Option<usize>> {
    match first {
        None => Ok(None),
        Some(n) if n < 0 => Err(TodoError::Validation(format!(
            "Argument 'first' must be non-negative, got {}",
            n
        ))),
        Some(n) => Ok(Some(n as usize)),
    }
}

/// Parses the `status` listing argument.
pub fn parse_status(status: &str) -> Result<TodoStatus> {
    status.parse()
}
