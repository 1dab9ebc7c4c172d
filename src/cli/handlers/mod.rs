mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::TodoConfig;
use crate::graphql::{TodoSchema, build_schema};
use crate::storage::{self, TodoStore};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Common context passed to command handlers that need a project
pub struct CommandContext {
    pub config: TodoConfig,
    pub root: PathBuf,
    pub store: Arc<dyn TodoStore>,
}

impl CommandContext {
    pub fn new(config: TodoConfig, root: PathBuf) -> Self {
        let store = storage::open(&config, &root);
        Self {
            config,
            root,
            store,
        }
    }

    pub fn schema(&self) -> TodoSchema {
        build_schema(self.store.clone())
    }
}

/// Runs one GraphQL request, prints the JSON response and fails if the
/// response carries errors.
fn execute_and_print(schema: &TodoSchema, document: &str, variables: Option<String>) -> Result<()> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
