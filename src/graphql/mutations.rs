//! The six Relay mutations.
//!
//! Each handler validates its whole input before the first write, then
//! writes through the store and shapes the payload. Payload viewers are
//! resolved after the handler returns, i.e. after the write.

use async_graphql::ID;

use super::types::*;
use super::viewer::Viewer;
use crate::error::Result;
use crate::model::{TodoFilter, TodoOrder, TodoPatch};
use crate::relay::{Edge, global_id, resolve_todo};
use crate::storage::TodoStore;
use crate::validation;

pub fn add_todo(store: &dyn TodoStore, input: AddTodoInput) -> Result<AddTodoPayload> {
    validation::validate_text(&input.text)?;

    let id = store.create(&input.text, false)?;
    let todo = store.get(id)?;
    // The new record has the highest id, so it sits last in id order. Another
    // writer between these calls can make the offset stale.
    let offset = store.count(&TodoFilter::all())?.saturating_sub(1);
    tracing::debug!(id, offset, "Added todo");

    Ok(AddTodoPayload {
        todo_edge: Edge::at(todo, offset).into(),
        viewer: Viewer,
        client_mutation_id: input.client_mutation_id,
    })
}

pub fn rename_todo(store: &dyn TodoStore, input: RenameTodoInput) -> Result<RenameTodoPayload> {
    validation::validate_text(&input.text)?;
    let todo = resolve_todo(store, &input.id)?;

    let todo = store.update(todo.id, &TodoPatch::text(input.text))?;
    Ok(RenameTodoPayload {
        todo: todo.into(),
        client_mutation_id: input.client_mutation_id,
    })
}

pub fn change_todo_status(
    store: &dyn TodoStore,
    input: ChangeTodoStatusInput,
) -> Result<ChangeTodoStatusPayload> {
    let todo = resolve_todo(store, &input.id)?;

    let todo = store.update(todo.id, &TodoPatch::complete(input.complete))?;
    Ok(ChangeTodoStatusPayload {
        todo: todo.into(),
        viewer: Viewer,
        client_mutation_id: input.client_mutation_id,
    })
}

pub fn mark_all_todos(
    store: &dyn TodoStore,
    input: MarkAllTodosInput,
) -> Result<MarkAllTodosPayload> {
    let stale = store.list(
        &TodoFilter::with_complete(!input.complete),
        TodoOrder::IdAscending,
    )?;

    let patch = TodoPatch::complete(input.complete);
    let mut changed_todos: Vec<Todo> = Vec::with_capacity(stale.len());
    for todo in stale {
        changed_todos.push(store.update(todo.id, &patch)?.into());
    }
    tracing::info!(complete = input.complete, changed = changed_todos.len(), "Marked all todos");

    Ok(MarkAllTodosPayload {
        changed_todos,
        viewer: Viewer,
        client_mutation_id: input.client_mutation_id,
    })
}

pub fn remove_todo(store: &dyn TodoStore, input: RemoveTodoInput) -> Result<RemoveTodoPayload> {
    let todo = resolve_todo(store, &input.id)?;

    store.delete(todo.id)?;
    Ok(RemoveTodoPayload {
        deleted_todo_id: input.id,
        viewer: Viewer,
        client_mutation_id: input.client_mutation_id,
    })
}

pub fn remove_completed_todos(
    store: &dyn TodoStore,
    input: RemoveCompletedTodosInput,
) -> Result<RemoveCompletedTodosPayload> {
    let completed = store.list(&TodoFilter::completed(), TodoOrder::IdAscending)?;

    let mut deleted_todo_ids = Vec::with_capacity(completed.len());
    for todo in completed {
        store.delete(todo.id)?;
        deleted_todo_ids.push(ID(global_id::encode_todo(todo.id)));
    }
    tracing::info!(removed = deleted_todo_ids.len(), "Removed completed todos");

    Ok(RemoveCompletedTodosPayload {
        deleted_todo_ids,
        viewer: Viewer,
        client_mutation_id: input.client_mutation_id,
    })
}
