//! Data models for todos.
//!
//! - [`Todo`]: the single record type served by the API
//! - [`TodoPatch`]: partial update applied by the store
//! - [`TodoFilter`]: exact/substring/prefix text and completion filters
//! - [`TodoOrder`]: explicit ordering every listing must name
//! - [`TodoStatus`]: the `status` shorthand accepted by `todos(status: ...)`

mod todo;
mod types;

pub use todo::{Todo, TodoId, TodoPatch};
pub use types::{TodoFilter, TodoOrder, TodoStatus};
