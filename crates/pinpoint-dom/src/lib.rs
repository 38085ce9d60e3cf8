//! In-memory, read-only document model.
//!
//! Parses HTML-ish markup into an arena tree and evaluates CSS selectors
//! against it, so the synthesis engine can run without a browser.

pub mod document;
pub mod error;
pub mod markup;
pub mod node;
pub mod selector;

pub use document::Document;
pub use error::DomError;
pub use node::{ElementData, Node, NodeId, NodeKind};
pub use selector::{SelectorList, parse_selector};
