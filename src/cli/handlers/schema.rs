use crate::graphql::build_schema;
use crate::storage::MemoryStore;
use anyhow::Result;
use std::sync::Arc;

/// Prints the SDL. Needs no project: the schema does not depend on the store.
pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(MemoryStore::new()));
    println!("{}", schema.sdl());
    Ok(())
}
