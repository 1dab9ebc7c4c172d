//! # relay-todo - a Relay-compliant GraphQL todo API
//!
//! A small GraphQL server over a single `Todo` record type, following the
//! Relay server conventions: global object identification, cursor-based
//! connections and client mutation ids.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a project config (.relay-todo.yml) and JSON data file
//! relay-todo init
//!
//! # Add a todo
//! relay-todo mutate 'addTodo(input: { text: "Taste Rust" }) { todoEdge { node { id } } }'
//!
//! # Serve GraphiQL and the API on http://localhost:4000
//! relay-todo serve
//! ```
//!
//! ## Modules
//!
//! - [`relay`]: global ids, cursors, connections and node dispatch
//! - [`graphql`]: async-graphql schema, resolvers and HTTP server
//! - [`storage`]: the `TodoStore` trait with memory and file backends
//! - [`model`]: `Todo`, filters and ordering
//! - [`cli`]: command-line interface

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.relay-todo.yml` files and project discovery.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models: `Todo`, `TodoPatch`, `TodoFilter`, `TodoOrder`.
pub mod model;

/// Relay building blocks independent of the GraphQL library.
pub mod relay;

/// Record stores.
pub mod storage;

/// Input validation run before any write.
pub mod validation;
