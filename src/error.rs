use async_graphql::ErrorExtensions;
use std::fmt;
use thiserror::Error;

/// Why a mutation rejected a todo id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidIdReason {
    Malformed,
    WrongType(String),
    Missing,
}

impl fmt::Display for InvalidIdReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidIdReason::Malformed => write!(f, "not a valid global id"),
            InvalidIdReason::WrongType(t) => write!(f, "refers to a {}, not a Todo", t),
            InvalidIdReason::Missing => write!(f, "no such todo"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unknown node type: {0}")]
    UnknownType(String),

    #[error("Invalid todo ID {id:?}: {reason}")]
    InvalidId { id: String, reason: InvalidIdReason },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'relay-todo init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl TodoError {
    pub fn invalid_id(id: impl Into<String>, reason: InvalidIdReason) -> Self {
        TodoError::InvalidId {
            id: id.into(),
            reason,
        }
    }

    /// Machine-readable code attached to GraphQL errors as `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            TodoError::Decode(_) => "DECODE_ERROR",
            TodoError::NotFound(_) => "NOT_FOUND",
            TodoError::UnknownType(_) => "UNKNOWN_TYPE",
            TodoError::InvalidId { .. } => "INVALID_ID",
            TodoError::Validation(_) => "VALIDATION_ERROR",
            TodoError::Config(_) | TodoError::NotInitialized | TodoError::AlreadyInitialized(_) => {
                "CONFIG_ERROR"
            }
            TodoError::Storage(_) | TodoError::Io(_) | TodoError::Yaml(_) | TodoError::Json(_) => {
                "STORE_ERROR"
            }
        }
    }
}

impl ErrorExtensions for TodoError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
