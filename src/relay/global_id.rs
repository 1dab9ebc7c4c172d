//! Relay global object identifiers.
//!
//! A global id is the standard base64 encoding of `"<TypeName>:<local key>"`,
//! e.g. `Todo:1` becomes `VG9kbzox`.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{Result, TodoError};
use crate::model::TodoId;

/// GraphQL type name of the todo node.
pub const TODO_TYPE: &str = "Todo";

/// GraphQL type name of the viewer node.
pub const VIEWER_TYPE: &str = "User";

/// Local key used for the singleton viewer. Any key resolves to the viewer;
/// this is the one we hand out.
pub const VIEWER_KEY: &str = "viewer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    pub type_name: String,
    pub local_key: String,
}

impl GlobalId {
    /// Parses the local key as a todo primary key.
    pub fn todo_id(&self) -> Result<TodoId> {
        self.local_key.parse::<TodoId>().map_err(|_| {
            TodoError::Decode(format!(
                "Local key '{}' of {} is not a valid integer id",
                self.local_key, self.type_name
            ))
        })
    }
}

pub fn encode(type_name: &str, local_key: &str) -> String {
    debug_assert!(!type_name.contains(':'));
    STANDARD.encode(format!("{}:{}", type_name, local_key))
}

pub fn encode_todo(id: TodoId) -> String {
    encode(TODO_TYPE, &id.to_string())
}

pub fn viewer_id() -> String {
    encode(VIEWER_TYPE, VIEWER_KEY)
}

pub fn decode(global_id: &str) -> Result<GlobalId> {
    let bytes = STANDARD
        .decode(global_id)
        .map_err(|e| TodoError::Decode(format!("Global id '{}' is not base64: {}", global_id, e)))?;
    let raw = String::from_utf8(bytes)
        .map_err(|_| TodoError::Decode(format!("Global id '{}' is not UTF-8", global_id)))?;
    let (type_name, local_key) = raw.split_once(':').ok_or_else(|| {
        TodoError::Decode(format!("Global id '{}' has no type delimiter", global_id))
    })?;
    if type_name.is_empty() || local_key.is_empty() {
        return Err(TodoError::Decode(format!(
            "Global id '{}' has an empty type or key",
            global_id
        )));
    }
    Ok(GlobalId {
        type_name: type_name.to_string(),
        local_key: local_key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encoding() {
        assert_eq!(encode_todo(1), "VG9kbzox");
        assert_eq!(encode("User", "viewer"), "VXNlcjp2aWV3ZXI=");
    }

    #[test]
    fn test_round_trip() {
        for (type_name, key) in [("Todo", "1"), ("Todo", "18446744073709551615"), ("User", "a:b")] {
            let decoded = decode(&encode(type_name, key)).unwrap();
            assert_eq!(decoded.type_name, type_name);
            assert_eq!(decoded.local_key, key);
        }
    }

    #[test]
    fn test_distinct_pairs_do_not_collide() {
        assert_ne!(encode("Todo", "1"), encode("Todo", "10"));
        assert_ne!(encode("Todo", "1"), encode("User", "1"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not base64!!"), Err(TodoError::Decode(_))));
        // "Todo1" has no delimiter
        assert!(matches!(decode("VG9kbzE="), Err(TodoError::Decode(_))));
        // ":1" has an empty type
        assert!(matches!(decode(&STANDARD.encode(":1")), Err(TodoError::Decode(_))));
        assert!(matches!(decode(""), Err(TodoError::Decode(_))));
    }

    #[test]
    fn test_todo_id_parse() {
        assert_eq!(decode(&encode_todo(42)).unwrap().todo_id().unwrap(), 42);
        let bad = decode(&encode("Todo", "abc")).unwrap();
        assert!(matches!(bad.todo_id(), Err(TodoError::Decode(_))));
    }
}
