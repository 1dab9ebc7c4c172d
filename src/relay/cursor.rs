//! Offset cursors in the `arrayconnection:<n>` format used by graphql-relay.
//!
//! A cursor names a position in one particular ordered, filtered listing. It
//! is not a stable reference to a record: inserts or deletes ahead of the
//! offset make the same cursor point somewhere else.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{Result, TodoError};

const PREFIX: &str = "arrayconnection:";

pub fn offset_to_cursor(offset: usize) -> String {
    STANDARD.encode(format!("{}{}", PREFIX, offset))
}

pub fn cursor_to_offset(cursor: &str) -> Result<usize> {
    let invalid = || TodoError::Decode(format!("Invalid cursor '{}'", cursor));
    let bytes = STANDARD.decode(cursor).map_err(|_| invalid())?;
    let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
    let offset = raw
        .strip_prefix(PREFIX)
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(invalid)?;
    // Only the exact encoding of an offset is accepted ("+1", "01" are not)
    if offset_to_cursor(offset) != cursor {
        return Err(invalid());
    }
    Ok(offset)
}
