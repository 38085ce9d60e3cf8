//! Document Query Abstraction
//!
//! This module defines the capability the synthesis engine needs from whatever
//! hosts the document: evaluating a CSS selector and walking element links.
//!
//! Implementations:
//! - `pinpoint-dom`: an in-memory document parsed from markup
//! - Tests: small hand-written mocks
//!
//! The engine only ever reads through this trait; it never mutates the document.

use std::fmt::Debug;
use thiserror::Error;

/// Read-only access to a live, queryable document tree.
///
/// `Node` is an opaque handle borrowed for the duration of a single synthesis
/// call. Handles are compared by identity, so two handles are equal exactly
/// when they refer to the same element.
pub trait DocumentQuery {
    type Node: Copy + Eq + Debug;

    /// Evaluate `selector` against the whole document and return every
    /// matching element in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Node>, QueryError>;

    /// Lower-case local tag name of the element.
    fn tag_name(&self, node: Self::Node) -> String;

    /// Attribute value, or `None` when the attribute is absent.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    /// Parent element. `None` when the parent is the document itself or the
    /// node is detached.
    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    fn previous_element_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    fn next_element_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether the node is attached to the document tree.
    fn is_connected(&self, node: Self::Node) -> bool;

    /// Attribute value if present and non-empty.
    fn non_empty_attribute(&self, node: Self::Node, name: &str) -> Option<String> {
        self.attribute(node, name).filter(|value| !value.is_empty())
    }
}

/// Errors that can occur while querying a document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Selector text could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The hosting environment failed to answer the query
    #[error("Backend error: {0}")]
    Backend(String),
}

impl QueryError {
    pub fn invalid(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}
