use super::TodoStore;
use crate::{
    error::{Result, TodoError},
    model::{Todo, TodoFilter, TodoId, TodoOrder, TodoPatch},
};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    next_id: TodoId,
    todos: BTreeMap<TodoId, Todo>,
}

/// Todos kept in a process-local map. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| TodoError::Storage("Memory store lock poisoned".to_string()))
    }
}

impl TodoStore for MemoryStore {
    fn create(&self, text: &str, complete: bool) -> Result<TodoId> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.todos.insert(id, Todo::new(id, text, complete));
        tracing::info!(id, complete, "Created todo");
        Ok(id)
    }

    fn get(&self, id: TodoId) -> Result<Todo> {
        self.lock()?
            .todos
            .get(&id)
            .cloned()
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo> {
        let mut inner = self.lock()?;
        let todo = inner
            .todos
            .get_mut(&id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        if patch.apply(todo) {
            tracing::info!(id, "Updated todo");
        }
        Ok(todo.clone())
    }

    fn delete(&self, id: TodoId) -> Result<()> {
        let mut inner = self.lock()?;
        inner
            .todos
            .remove(&id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        tracing::info!(id, "Deleted todo");
        Ok(())
    }

    fn count(&self, filter: &TodoFilter) -> Result<usize> {
        Ok(self
            .lock()?
            .todos
            .values()
            .filter(|t| filter.matches(t))
            .count())
    }

    fn list(&self, filter: &TodoFilter, order: TodoOrder) -> Result<Vec<Todo>> {
        let mut todos: Vec<Todo> = self
            .lock()?
            .todos
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        order.sort(&mut todos);
        Ok(todos)
    }
}
