//! Builds Relay connections from an already filtered, ordered listing.

use super::cursor::{cursor_to_offset, offset_to_cursor};
use crate::error::Result;

/// Forward pagination arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub first: Option<usize>,
    pub after: Option<String>,
}

impl PageRequest {
    pub fn new(first: Option<usize>, after: Option<String>) -> Self {
        Self { first, after }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

impl<T> Edge<T> {
    /// An edge for the record at `offset` in its listing.
    pub fn at(node: T, offset: usize) -> Self {
        Self {
            node,
            cursor: offset_to_cursor(offset),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Edge<U> {
        Edge {
            node: f(self.node),
            cursor: self.cursor,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            edges: self.edges.into_iter().map(|e| e.map(&mut f)).collect(),
            page_info: self.page_info,
        }
    }
}

/// Slices `records` according to `page`.
///
/// Edge cursors carry each record's absolute offset in `records`, so the
/// caller must pass the whole ordered listing, not a pre-cut page. An `after`
/// cursor beyond the end yields an empty page.
pub fn connection_from_vec<T>(records: Vec<T>, page: &PageRequest) -> Result<Connection<T>> {
    let total = records.len();

    let start = match page.after {
        Some(ref cursor) => cursor_to_offset(cursor)?.saturating_add(1).min(total),
        None => 0,
    };
    let end = match page.first {
        Some(first) => start.saturating_add(first).min(total),
        None => total,
    };

    let edges: Vec<Edge<T>> = records
        .into_iter()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(offset, node)| Edge::at(node, offset))
        .collect();

    let page_info = PageInfo {
        has_next_page: end < total,
        has_previous_page: page.after.is_some(),
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Ok(Connection { edges, page_info })
}
