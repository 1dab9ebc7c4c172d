//! Record stores for todos.
//!
//! The GraphQL layer only talks to [`TodoStore`]. Each call is atomic on its
//! own; the resolvers never hold a lock across calls, so a mutation that
//! writes and then counts may see another writer's changes in between.
//!
//! ## Components
//!
//! - [`TodoStore`]: the store contract
//! - [`MemoryStore`]: process-local map, used by `serve` with the memory backend and by tests
//! - [`FileStore`]: a single JSON document rewritten atomically on each write
//! - [`open`]: picks a backend from the project config

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::config::{StoreBackend, TodoConfig};
use crate::error::Result;
use crate::model::{Todo, TodoFilter, TodoId, TodoOrder, TodoPatch};
use std::path::Path;
use std::sync::Arc;

pub trait TodoStore: Send + Sync {
    /// Inserts a record and returns its newly assigned id.
    fn create(&self, text: &str, complete: bool) -> Result<TodoId>;

    /// Fetches one record, failing with `TodoError::NotFound` if absent.
    fn get(&self, id: TodoId) -> Result<Todo>;

    /// Applies `patch` and returns the record as stored afterwards.
    fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo>;

    fn delete(&self, id: TodoId) -> Result<()>;

    fn count(&self, filter: &TodoFilter) -> Result<usize>;

    fn list(&self, filter: &TodoFilter, order: TodoOrder) -> Result<Vec<Todo>>;
}

/// Opens the store configured for the project rooted at `project_root`.
pub fn open(config: &TodoConfig, project_root: &Path) -> Arc<dyn TodoStore> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::debug!("Using in-memory store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::File => {
            let path = config.data_path(project_root);
            tracing::debug!(path = %path.display(), "Using file store");
            Arc::new(FileStore::new(path))
        }
    }
}
