//! Command-line interface: argument definitions and command handlers.

mod commands;
pub mod handlers;

pub use commands::{BackendArg, Cli, Commands};
