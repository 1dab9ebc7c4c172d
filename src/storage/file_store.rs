use super::TodoStore;
use crate::{
    error::{Result, TodoError},
    model::{Todo, TodoFilter, TodoId, TodoOrder, TodoPatch},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

/// On-disk layout of the data file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TodoFile {
    #[serde(default)]
    next_id: TodoId,
    #[serde(default)]
    todos: Vec<Todo>,
}

/// Todos persisted as one JSON document.
///
/// Every call reads the file; every write replaces it atomically. The mutex
/// serialises access within one process only.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| TodoError::Storage("File store lock poisoned".to_string()))
    }

    fn read(&self) -> Result<TodoFile> {
        if !self.path.exists() {
            return Ok(TodoFile::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(TodoFile::default());
        }
        let mut file: TodoFile = serde_json::from_str(&content)?;
        // Repair a counter that lags behind the data (e.g. a hand-edited file).
        let max_id = file.todos.iter().map(|t| t.id).max().unwrap_or(0);
        file.next_id = file.next_id.max(max_id);
        Ok(file)
    }

    fn write(&self, file: &TodoFile) -> Result<()> {
        let content = serde_json::to_string_pretty(file)?;
        self.atomic_write(&content)
    }

    fn atomic_write(&self, content: &str) -> Result<()> {
        let target_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(target_dir)?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| TodoError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| TodoError::Storage(format!("Failed to write to temp file: {}", e)))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| TodoError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file.persist(&self.path).map_err(|e| {
            TodoError::Storage(format!(
                "Failed to persist {}: {}",
                self.path.display(),
                e.error
            ))
        })?;
        Ok(())
    }
}

impl TodoStore for FileStore {
    fn create(&self, text: &str, complete: bool) -> Result<TodoId> {
        let _guard = self.guard()?;
        let mut file = self.read()?;
        file.next_id += 1;
        let id = file.next_id;
        file.todos.push(Todo::new(id, text, complete));
        self.write(&file)?;
        tracing::info!(id, complete, path = %self.path.display(), "Created todo");
        Ok(id)
    }

    fn get(&self, id: TodoId) -> Result<Todo> {
        let _guard = self.guard()?;
        self.read()?
            .todos
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo> {
        let _guard = self.guard()?;
        let mut file = self.read()?;
        let todo = file
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        let changed = patch.apply(todo);
        let updated = todo.clone();
        if changed {
            self.write(&file)?;
            tracing::info!(id, "Updated todo");
        }
        Ok(updated)
    }

    fn delete(&self, id: TodoId) -> Result<()> {
        let _guard = self.guard()?;
        let mut file = self.read()?;
        let before = file.todos.len();
        file.todos.retain(|t| t.id != id);
        if file.todos.len() == before {
            return Err(TodoError::NotFound(id.to_string()));
        }
        self.write(&file)?;
        tracing::info!(id, "Deleted todo");
        Ok(())
    }

    fn count(&self, filter: &TodoFilter) -> Result<usize> {
        let _guard = self.guard()?;
        Ok(self.read()?.todos.iter().filter(|t| filter.matches(t)).count())
    }

    fn list(&self, filter: &TodoFilter, order: TodoOrder) -> Result<Vec<Todo>> {
        let _guard = self.guard()?;
        let mut todos: Vec<Todo> = self
            .read()?
            .todos
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();
        order.sort(&mut todos);
        Ok(todos)
    }
}
