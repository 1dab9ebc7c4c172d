//! Relay `node(id)` dispatch.
//!
//! The registry maps a decoded type name to a [`NodeFetcher`]. `Todo` and the
//! `User` viewer are registered by default; more types can be added without
//! touching the resolvers.

use std::collections::HashMap;

use super::global_id::{self, GlobalId, TODO_TYPE, VIEWER_TYPE};
use crate::error::{InvalidIdReason, Result, TodoError};
use crate::model::Todo;
use crate::storage::TodoStore;

/// A record reachable through `node(id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRecord {
    Viewer,
    Todo(Todo),
}

/// Fetches one record of a given node type by its local key.
pub trait NodeFetcher: Send + Sync {
    fn fetch(&self, store: &dyn TodoStore, id: &GlobalId) -> Result<NodeRecord>;
}

struct ViewerFetcher;

impl NodeFetcher for ViewerFetcher {
    fn fetch(&self, _store: &dyn TodoStore, _id: &GlobalId) -> Result<NodeRecord> {
        Ok(NodeRecord::Viewer)
    }
}

struct TodoFetcher;

impl NodeFetcher for TodoFetcher {
    fn fetch(&self, store: &dyn TodoStore, id: &GlobalId) -> Result<NodeRecord> {
        store.get(id.todo_id()?).map(NodeRecord::Todo)
    }
}

pub struct NodeRegistry {
    fetchers: HashMap<&'static str, Box<dyn NodeFetcher>>,
}

impl Default for NodeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(VIEWER_TYPE, Box::new(ViewerFetcher));
        registry.register(TODO_TYPE, Box::new(TodoFetcher));
        registry
    }
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            fetchers: HashMap::new(),
        }
    }

    pub fn register(&mut self, type_name: &'static str, fetcher: Box<dyn NodeFetcher>) {
        self.fetchers.insert(type_name, fetcher);
    }

    /// Resolves a global id. A well-formed id of a known type whose record is
    /// gone resolves to `Ok(None)`.
    pub fn resolve(&self, store: &dyn TodoStore, global_id: &str) -> Result<Option<NodeRecord>> {
        let id = global_id::decode(global_id)?;
        let fetcher = self
            .fetchers
            .get(id.type_name.as_str())
            .ok_or_else(|| TodoError::UnknownType(id.type_name.clone()))?;
        match fetcher.fetch(store, &id) {
            Ok(record) => Ok(Some(record)),
            Err(TodoError::NotFound(key)) => {
                tracing::debug!(type_name = %id.type_name, key = %key, "Node not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Resolves a mutation's todo id, mapping every failure to
/// `TodoError::InvalidId` with the reason it was rejected.
pub fn resolve_todo(store: &dyn TodoStore, global_id: &str) -> Result<Todo> {
    let id = global_id::decode(global_id)
        .map_err(|_| TodoError::invalid_id(global_id, InvalidIdReason::Malformed))?;
    if id.type_name != TODO_TYPE {
        return Err(TodoError::invalid_id(
            global_id,
            InvalidIdReason::WrongType(id.type_name),
        ));
    }
    let key = id
        .todo_id()
        .map_err(|_| TodoError::invalid_id(global_id, InvalidIdReason::Malformed))?;
    match store.get(key) {
        Ok(todo) => Ok(todo),
        Err(TodoError::NotFound(_)) => {
            Err(TodoError::invalid_id(global_id, InvalidIdReason::Missing))
        }
        Err(e) => Err(e),
    }
}
