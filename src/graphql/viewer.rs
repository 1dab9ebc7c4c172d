//! The `viewer` aggregate.
//!
//! There is one viewer for everybody. It carries no state of its own: every
//! field reads the store when it is resolved, so a viewer returned in a
//! mutation payload reflects that mutation's write.

use async_graphql::{Context, ErrorExtensions, ID, Object};

use super::schema::app_state;
use super::types::TodoConnection;
use crate::error::Result;
use crate::model::{self, TodoFilter, TodoOrder, TodoStatus};
use crate::relay::{Connection, PageRequest, connection_from_vec, global_id};
use crate::storage::TodoStore;
use crate::validation;

#[derive(Debug, Clone, Copy, Default)]
pub struct Viewer;

#[Object(name = "User")]
impl Viewer {
    pub async fn id(&self) -> ID {
        ID(global_id::viewer_id())
    }

    /// Todos in id order, optionally filtered and paginated
    #[allow(clippy::too_many_arguments)]
    async fn todos(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Exact text match")] text: Option<String>,
        #[graphql(desc = "Case-insensitive substring match")] text_contains: Option<String>,
        #[graphql(desc = "Case-insensitive prefix match")] text_startswith: Option<String>,
        complete: Option<bool>,
        #[graphql(
            default_with = "String::from(\"any\")",
            desc = "One of any, active, completed"
        )]
        status: String,
        first: Option<i32>,
        after: Option<String>,
    ) -> async_graphql::Result<Option<TodoConnection>> {
        let state = app_state(ctx)?;
        let build = || -> Result<TodoConnection> {
            let status = validation::parse_status(&status)?;
            let page = PageRequest::new(validation::validate_first(first)?, after);
            let filter = listing_filter(
                TodoFilter {
                    text,
                    text_contains,
                    text_startswith,
                    complete,
                },
                status,
            );
            Ok(todos_connection(state.store.as_ref(), filter, &page)?.into())
        };
        build().map(Some).map_err(|e| e.extend())
    }

    /// Number of todos, ignoring any listing filter
    async fn total_count(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<usize>> {
        let state = app_state(ctx)?;
        state
            .store
            .count(&TodoFilter::all())
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// Number of completed todos, ignoring any listing filter
    async fn completed_count(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<usize>> {
        let state = app_state(ctx)?;
        state
            .store
            .count(&TodoFilter::completed())
            .map(Some)
            .map_err(|e| e.extend())
    }
}

/// Folds the `status` shorthand into the filter. `None` means the two
/// completion constraints contradict each other and nothing can match.
pub fn listing_filter(mut filter: TodoFilter, status: TodoStatus) -> Option<TodoFilter> {
    match (filter.complete, status.complete()) {
        (Some(a), Some(b)) if a != b => None,
        (None, Some(b)) => {
            filter.complete = Some(b);
            Some(filter)
        }
        _ => Some(filter),
    }
}

/// Lists matching todos in id order and pages through them.
pub fn todos_connection(
    store: &dyn TodoStore,
    filter: Option<TodoFilter>,
    page: &PageRequest,
) -> Result<Connection<model::Todo>> {
    let todos = match filter {
        Some(ref filter) => store.list(filter, TodoOrder::IdAscending)?,
        None => Vec::new(),
    };
    connection_from_vec(todos, page)
}
