//! Positional addressing inside a tree.
//!
//! A [`Path`] is the sequence of child indices leading from a root node to
//! a descendant. The empty path addresses the root itself.

use std::fmt;

use smallvec::SmallVec;

use crate::error::NodeError;
use crate::node::Node;

/// A sequence of child indices from a root.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(SmallVec<[usize; 8]>);

impl Path {
    /// The path of the root itself.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Returns the path of the `index`-th child of this position.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(index);
        Self(steps)
    }

    /// Returns the path of the parent position, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(SmallVec::from_slice(init)))
    }

    /// Returns the index of this position within its parent.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the child indices.
    #[must_use]
    pub fn steps(&self) -> &[usize] {
        &self.0
    }

    /// Returns true if `self` addresses `other` or one of its descendants.
    #[must_use]
    pub fn starts_with(&self, other: &Path) -> bool {
        self.0.starts_with(&other.0)
    }

    /// Returns true if `self` addresses a strict descendant of `other`.
    #[must_use]
    pub fn is_below(&self, other: &Path) -> bool {
        self.len() > other.len() && self.starts_with(other)
    }
}

impl From<&[usize]> for Path {
    fn from(steps: &[usize]) -> Self {
        Self(SmallVec::from_slice(steps))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path{:?}", self.0.as_slice())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/")?;
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl Node {
    /// Returns the descendant at `path`, if it exists.
    #[must_use]
    pub fn at(&self, path: &Path) -> Option<&Node> {
        path.steps()
            .iter()
            .try_fold(self, |node, &i| node.children().get(i))
    }

    /// Returns the descendant at `path` mutably, if it exists.
    pub fn at_mut(&mut self, path: &Path) -> Option<&mut Node> {
        path.steps()
            .iter()
            .try_fold(self, |node, &i| node.children_mut().get_mut(i))
    }

    /// Returns the descendant at `path`, or an error naming the path.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidPath`] if some step does not exist.
    pub fn try_at(&self, path: &Path) -> Result<&Node, NodeError> {
        self.at(path).ok_or_else(|| NodeError::InvalidPath(path.clone()))
    }

    /// Returns the descendant at `path` mutably, or an error naming the path.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::InvalidPath`] if some step does not exist.
    pub fn try_at_mut(&mut self, path: &Path) -> Result<&mut Node, NodeError> {
        self.at_mut(path)
            .ok_or_else(|| NodeError::InvalidPath(path.clone()))
    }

    /// Collects the paths of every node in this subtree, children first.
    #[must_use]
    pub fn postorder_paths(&self) -> Vec<Path> {
        fn walk(node: &Node, here: &Path, out: &mut Vec<Path>) {
            for (i, child) in node.children().iter().enumerate() {
                walk(child, &here.child(i), out);
            }
            out.push(here.clone());
        }

        let mut out = Vec::with_capacity(self.size());
        walk(self, &Path::root(), &mut out);
        out
    }
}
