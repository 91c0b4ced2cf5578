//! Cursor pagination and block-tree traversal.
//!
//! Two lazy building blocks shared by every list endpoint:
//!
//! - [`paginate`] turns a single-page fetch function into a stream of items,
//!   following `next_cursor` until the endpoint reports `has_more = false`.
//! - [`walk`] runs a breadth-first traversal over an implicit tree whose
//!   children are themselves paginated, under an item [`Budget`] shared by
//!   the whole traversal.
//!
//! Both are plain [`Iterator`]s of `Result<T, AppError>`. A fetch happens
//! only when the consumer asks for an item past the end of the current page,
//! so dropping the iterator early never leaves a request in flight.
//!
//! # Laws
//!
//! - **P1 (Order)**: items come out in page order, then in-page order.
//! - **P2 (Single page)**: with a page size override exactly one fetch is made.
//! - **P3 (Fail once)**: a failed fetch is yielded once as `Err`, after which
//!   the iterator is exhausted. Items yielded before it stay valid.
//! - **W1 (Breadth first)**: every child of a node is yielded before any
//!   grandchild reached through it.
//! - **W2 (Budget)**: a walk with `Budget::limited(k)` yields at most `k`
//!   items and stops fetching as soon as the k-th item is out.

mod budget;
mod paginator;
mod walker;

pub use budget::Budget;
pub use paginator::{paginate, Paginator};
pub use walker::{walk, TreeNode, TreeWalker};

use serde::Deserialize;

/// Parameters for one page fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token from the previous page; `None` for the first page.
    pub start_cursor: Option<String>,
    /// Explicit page size; `None` leaves the endpoint default.
    pub page_size: Option<u32>,
}

impl PageRequest {
    /// Query-string pairs for GET list endpoints.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.page_size {
            pairs.push(("page_size", size.to_string()));
        }
        if let Some(cursor) = &self.start_cursor {
            pairs.push(("start_cursor", cursor.clone()));
        }
        pairs
    }

    /// JSON body for POST list endpoints.
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({});
        if let Some(size) = self.page_size {
            body["page_size"] = serde_json::json!(size);
        }
        if let Some(cursor) = &self.start_cursor {
            body["start_cursor"] = serde_json::json!(cursor);
        }
        body
    }
}

/// One page of results from a Notion list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageBatch<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> PageBatch<T> {
    /// A final page holding `results`.
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }

    /// A page followed by more results reachable through `cursor`.
    pub fn more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(cursor.into()),
            has_more: true,
        }
    }
}
