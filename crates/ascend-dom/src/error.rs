//! Error types for document operations.

use crate::node::NodeId;

/// Errors that can occur while querying or mutating a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Node not found in the document (never created, or removed).
    NodeNotFound(NodeId),
    /// The operation needs an element node.
    NotAnElement(NodeId),
    /// The selector string could not be parsed.
    InvalidSelector {
        /// The rejected selector text.
        selector: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// Inserting `child` under `parent` would break the tree.
    HierarchyRequest {
        /// The would-be parent.
        parent: NodeId,
        /// The node being inserted.
        child: NodeId,
    },
}

impl std::fmt::Display for DomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
            DomError::NotAnElement(id) => write!(f, "Node {:?} is not an element", id),
            DomError::InvalidSelector { selector, reason } => {
                write!(f, "Invalid selector '{}': {}", selector, reason)
            }
            DomError::HierarchyRequest { parent, child } => {
                write!(f, "Cannot insert {:?} under {:?}", child, parent)
            }
        }
    }
}

impl std::error::Error for DomError {}

/// Result type for document operations.
pub type DomResult<T> = Result<T, DomError>;
