use super::todo::Todo;
use crate::error::{Result, TodoError};
use std::str::FromStr;

/// Ordering for a listing. Pagination cursors are offsets, so every listing
/// names its order explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoOrder {
    #[default]
    IdAscending,
}

impl TodoOrder {
    pub fn sort(self, todos: &mut [Todo]) {
        match self {
            TodoOrder::IdAscending => todos.sort_by_key(|t| t.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoStatus {
    #[default]
    Any,
    Active,
    Completed,
}

impl TodoStatus {
    /// The completion flag this status selects, if any.
    pub fn complete(self) -> Option<bool> {
        match self {
            TodoStatus::Any => None,
            TodoStatus::Active => Some(false),
            TodoStatus::Completed => Some(true),
        }
    }
}

impl FromStr for TodoStatus {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "any" => Ok(TodoStatus::Any),
            "active" => Ok(TodoStatus::Active),
            "completed" => Ok(TodoStatus::Completed),
            _ => Err(TodoError::Validation(format!(
                "Invalid status '{}' (expected any, active or completed)",
                s
            ))),
        }
    }
}

/// Record filter understood by every store.
///
/// Text matching follows the listing arguments of the `todos` field: `text`
/// is exact, `text_contains` and `text_startswith` are case-insensitive.
/// All present constraints must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub text: Option<String>,
    pub text_contains: Option<String>,
    pub text_startswith: Option<String>,
    pub complete: Option<bool>,
}

impl TodoFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn completed() -> Self {
        Self::with_complete(true)
    }

    pub fn with_complete(complete: bool) -> Self {
        Self {
            complete: Some(complete),
            ..Self::default()
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(ref text) = self.text {
            if todo.text != *text {
                return false;
            }
        }
        if let Some(ref needle) = self.text_contains {
            if !todo.text.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref prefix) = self.text_startswith {
            if !todo.text.to_lowercase().starts_with(&prefix.to_lowercase()) {
                return false;
            }
        }
        if let Some(complete) = self.complete {
            if todo.complete != complete {
                return false;
            }
        }
        true
    }
}
