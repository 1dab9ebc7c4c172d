//! Relay building blocks, independent of the GraphQL library.
//!
//! - [`global_id`]: opaque `Type:key` node identifiers
//! - [`cursor`]: offset cursors
//! - [`connection`]: edges and page info over an ordered listing
//! - [`node`]: type-name dispatch for `node(id)`

pub mod connection;
pub mod cursor;
pub mod global_id;
pub mod node;

pub use connection::{Connection, Edge, PageInfo, PageRequest, connection_from_vec};
pub use cursor::{cursor_to_offset, offset_to_cursor};
pub use global_id::GlobalId;
pub use node::{NodeFetcher, NodeRecord, NodeRegistry, resolve_todo};
