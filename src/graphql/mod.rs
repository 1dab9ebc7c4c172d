//! GraphQL schema and resolvers for the todo API.
//!
//! The schema follows the Relay server conventions: every object has a
//! global `id` and is reachable through `node(id:)`, lists are connections
//! with cursors and `pageInfo`, and each mutation takes a single `input`
//! object whose `clientMutationId` comes back unchanged in the payload.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! relay-todo serve --port 4000
//!
//! # Execute a query from CLI
//! relay-todo query '{ viewer { totalCount completedCount } }'
//!
//! # Execute a mutation from CLI
//! relay-todo mutate 'addTodo(input: { text: "Buy milk" }) { todoEdge { cursor } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `node`, `viewer`
//! - **Mutations**: `addTodo`, `renameTodo`, `changeTodoStatus`, `markAllTodos`,
//!   `removeTodo`, `removeCompletedTodos`

mod mutations;
mod schema;
mod server;
mod types;
mod viewer;

pub use schema::{AppState, MutationRoot, QueryRoot, TodoSchema, build_schema, build_schema_with};
pub use server::{router, run_server};
pub use types::*;
pub use viewer::Viewer;
