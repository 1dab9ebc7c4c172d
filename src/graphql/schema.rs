use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::relay::NodeRegistry;
use crate::storage::TodoStore;

use super::mutations;
use super::types::*;
use super::viewer::Viewer;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub nodes: NodeRegistry,
}

pub fn build_schema(store: Arc<dyn TodoStore>) -> TodoSchema {
    build_schema_with(store, NodeRegistry::new())
}

pub fn build_schema_with(store: Arc<dyn TodoStore>, nodes: NodeRegistry) -> TodoSchema {
    let state = Arc::new(AppState { store, nodes });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub(super) fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    Ok(ctx.data::<Arc<AppState>>()?.as_ref())
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Fetches an object given its ID
    async fn node(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Node>> {
        let state = app_state(ctx)?;
        let record = state
            .nodes
            .resolve(state.store.as_ref(), &id)
            .map_err(|e| e.extend())?;
        Ok(record.map(Node::from))
    }

    /// The single aggregate root: counts and the todo listing
    async fn viewer(&self) -> Option<Viewer> {
        Some(Viewer)
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a todo, returning its edge in the id-ordered listing
    async fn add_todo(
        &self,
        ctx: &Context<'_>,
        input: AddTodoInput,
    ) -> async_graphql::Result<AddTodoPayload> {
        let state = app_state(ctx)?;
        mutations::add_todo(state.store.as_ref(), input).map_err(|e| e.extend())
    }

    /// Replace a todo's text
    async fn rename_todo(
        &self,
        ctx: &Context<'_>,
        input: RenameTodoInput,
    ) -> async_graphql::Result<RenameTodoPayload> {
        let state = app_state(ctx)?;
        mutations::rename_todo(state.store.as_ref(), input).map_err(|e| e.extend())
    }

    /// Set a todo's completion flag
    async fn change_todo_status(
        &self,
        ctx: &Context<'_>,
        input: ChangeTodoStatusInput,
    ) -> async_graphql::Result<ChangeTodoStatusPayload> {
        let state = app_state(ctx)?;
        mutations::change_todo_status(state.store.as_ref(), input).map_err(|e| e.extend())
    }

    /// Set the completion flag on every todo, returning the ones that changed
    async fn mark_all_todos(
        &self,
        ctx: &Context<'_>,
        input: MarkAllTodosInput,
    ) -> async_graphql::Result<MarkAllTodosPayload> {
        let state = app_state(ctx)?;
        mutations::mark_all_todos(state.store.as_ref(), input).map_err(|e| e.extend())
    }

    /// Delete a todo
    async fn remove_todo(
        &self,
        ctx: &Context<'_>,
        input: RemoveTodoInput,
    ) -> async_graphql::Result<RemoveTodoPayload> {
        let state = app_state(ctx)?;
        mutations::remove_todo(state.store.as_ref(), input).map_err(|e| e.extend())
    }

    /// Delete every completed todo
    async fn remove_completed_todos(
        &self,
        ctx: &Context<'_>,
        input: RemoveCompletedTodosInput,
    ) -> async_graphql::Result<RemoveCompletedTodosPayload> {
        let state = app_state(ctx)?;
        mutations::remove_completed_todos(state.store.as_ref(), input).map_err(|e| e.extend())
    }
}
