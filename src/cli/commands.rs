use crate::config::{StoreBackend, StoreSettings};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relay-todo")]
#[command(
    author,
    version,
    about = "A Relay-compliant GraphQL todo API with global ids and cursor pagination"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .relay-todo.yml by default)
    #[arg(long, global = true, env = "RELAY_TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new project in the current directory
    Init {
        /// Storage backend
        #[arg(long, value_enum, default_value = "file")]
        backend: BackendArg,

        /// Data file for the file backend
        #[arg(long, default_value_t = StoreSettings::default().path)]
        path: String,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL document
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the GraphQL schema in SDL
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BackendArg {
    File,
    Memory,
}

impl From<BackendArg> for StoreBackend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::File => StoreBackend::File,
            BackendArg::Memory => StoreBackend::Memory,
        }
    }
}
