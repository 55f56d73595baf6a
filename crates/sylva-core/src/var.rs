//! Variable indices.
//!
//! Both bound-variable references in expression trees and first-order
//! variables inside predicate terms are identified by a 32-bit index.

use std::fmt;

/// The symbolic index of a variable.
///
/// Indices are plain integers that can be copied freely. Two indices are
/// equal if and only if they denote the same variable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarIndex(u32);

impl VarIndex {
    /// Creates a variable index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for VarIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Debug for VarIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var({})", self.0)
    }
}

impl fmt::Display for VarIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
