use serde::{Deserialize, Serialize};

/// Store-assigned primary key. Ids start at 1 and are never reused.
pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub complete: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>, complete: bool) -> Self {
        Self {
            id,
            text: text.into(),
            complete,
        }
    }
}

/// Fields to change on an existing todo. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub complete: Option<bool>,
}

impl TodoPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            complete: None,
        }
    }

    pub fn complete(complete: bool) -> Self {
        Self {
            text: None,
            complete: Some(complete),
        }
    }

    /// Apply the patch in place, returning whether anything changed.
    pub fn apply(&self, todo: &mut Todo) -> bool {
        let mut changed = false;
        if let Some(ref text) = self.text {
            if todo.text != *text {
                todo.text = text.clone();
                changed = true;
            }
        }
        if let Some(complete) = self.complete {
            if todo.complete != complete {
                todo.complete = complete;
                changed = true;
            }
        }
        changed
    }
}
