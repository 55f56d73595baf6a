//! Errors raised by tree navigation and invariant checks.

use thiserror::Error;

use crate::path::Path;

/// An error from addressing or checking a tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NodeError {
    /// No node exists at the path.
    #[error("no node at {0}")]
    InvalidPath(Path),

    /// A node is reachable from more than one parent slot.
    #[error("node at {0} is shared with another parent slot")]
    SharedNode(Path),
}
