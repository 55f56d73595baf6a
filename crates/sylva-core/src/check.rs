//! Strict-tree invariant checking.
//!
//! Every non-root node must be reachable from exactly one parent slot.
//! Owned children make this hold by construction; the checker walks a
//! tree and verifies it anyway, which is what property tests rely on after
//! long random rewrite sequences.

use rustc_hash::FxHashSet;

use crate::error::NodeError;
use crate::node::Node;
use crate::path::Path;

/// Verifies that no node in `root` is reachable twice.
///
/// Returns the number of nodes visited.
///
/// # Errors
///
/// Returns [`NodeError::SharedNode`] with the path of the first node seen
/// a second time.
pub fn check_strict_tree(root: &Node) -> Result<usize, NodeError> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![(root, Path::root())];

    while let Some((node, path)) = stack.pop() {
        if !seen.insert(std::ptr::from_ref(node)) {
            return Err(NodeError::SharedNode(path));
        }
        for (i, child) in node.children().iter().enumerate() {
            stack.push((child, path.child(i)));
        }
    }

    Ok(seen.len())
}
