//! Pattern descriptors.
//!
//! A pattern describes the *shape* a match must have, independent of node
//! variants: a tree of labelled positions. The syntax is
//!
//! ```text
//! position := label
//!           | label '(' position (',' position)* ')'   -- fixed child indices
//!           | label '{' position (',' position)* '}'   -- distinct children, any order
//! ```
//!
//! For example `d(p(u, v), x)` binds `p` to child 0 of the root and `u`,
//! `v` to the first two children of `p`, while `set{a{b}, c{d}}` binds `a`
//! and `c` to any two distinct children of the root. A position only
//! matches a node with at least as many children as it lists.

use std::fmt;
use std::str::FromStr;

use sylva_core::{Node, Path};

use crate::error::PatternError;

/// How a position is located relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The root of the match.
    Root,
    /// A fixed child index.
    Fixed(usize),
    /// Any child not already taken by a sibling in the same group.
    Free,
}

/// A labelled position in a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// The label used by guards and actions.
    pub label: String,
    /// Index of the parent position, `None` for the root.
    pub parent: Option<usize>,
    /// Where the position sits under its parent.
    pub slot: Slot,
    /// Minimum number of children the bound node must have.
    pub min_children: usize,
}

/// A parsed pattern descriptor.
///
/// Positions are stored in declaration (pre-)order; the root is always
/// position 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    positions: Vec<Position>,
}

impl Pattern {
    /// Parses a descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the descriptor is malformed or repeats
    /// a label.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let mut parser = Parser {
            chars: source.char_indices().collect(),
            at: 0,
            end: source.len(),
            positions: Vec::new(),
        };
        parser.skip_ws();
        if parser.peek().is_none() {
            return Err(PatternError::Empty);
        }
        parser.position(None, Slot::Root)?;
        parser.skip_ws();
        if let Some((offset, c)) = parser.peek() {
            return Err(PatternError::Unexpected {
                found: Some(c),
                offset,
            });
        }
        Ok(Self {
            source: source.trim().to_string(),
            positions: parser.positions,
        })
    }

    /// Returns the declared positions in declaration order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of declared positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a parsed pattern has at least a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the declaration index of `label`.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.positions.iter().position(|p| p.label == label)
    }

    /// Returns the label of the root position.
    #[must_use]
    pub fn root_label(&self) -> &str {
        &self.positions[0].label
    }

    /// Enumerates every structural binding of this pattern at `root`.
    ///
    /// `visit` receives one path per position (relative to `root`, in
    /// declaration order) and returns `true` to stop the enumeration.
    /// Returns whether some call to `visit` stopped it.
    pub fn for_each_binding(&self, root: &Node, visit: &mut dyn FnMut(&[Path]) -> bool) -> bool {
        if root.children().len() < self.positions[0].min_children {
            return false;
        }
        let mut paths = vec![Path::root(); self.positions.len()];
        self.bind(1, root, &mut paths, visit)
    }

    /// Returns the first structural binding at `root`, if any.
    #[must_use]
    pub fn first_binding(&self, root: &Node) -> Option<Vec<Path>> {
        let mut found = None;
        self.for_each_binding(root, &mut |paths| {
            found = Some(paths.to_vec());
            true
        });
        found
    }

    fn bind(
        &self,
        i: usize,
        root: &Node,
        paths: &mut [Path],
        visit: &mut dyn FnMut(&[Path]) -> bool,
    ) -> bool {
        let Some(position) = self.positions.get(i) else {
            return visit(paths);
        };
        let Some(parent) = position.parent else {
            return false;
        };
        let Some(parent_node) = root.at(&paths[parent]) else {
            return false;
        };
        let arity = parent_node.children().len();

        let candidates = match position.slot {
            Slot::Fixed(k) if k < arity => k..k + 1,
            Slot::Fixed(_) => return false,
            Slot::Free => 0..arity,
            Slot::Root => return false,
        };

        for c in candidates {
            if position.slot == Slot::Free && self.taken_by_sibling(i, parent, c, paths) {
                continue;
            }
            let child = &parent_node.children()[c];
            if child.children().len() < position.min_children {
                continue;
            }
            paths[i] = paths[parent].child(c);
            if self.bind(i + 1, root, paths, visit) {
                return true;
            }
        }
        false
    }

    fn taken_by_sibling(&self, i: usize, parent: usize, c: usize, paths: &[Path]) -> bool {
        self.positions[..i]
            .iter()
            .zip(paths)
            .any(|(p, path)| p.parent == Some(parent) && path.last() == Some(c))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

struct Parser {
    chars: Vec<(usize, char)>,
    at: usize,
    end: usize,
    positions: Vec<Position>,
}

impl Parser {
    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.at).copied()
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.end, |(o, _)| o)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            self.at += 1;
        }
    }

    fn unexpected(&self) -> PatternError {
        PatternError::Unexpected {
            found: self.peek().map(|(_, c)| c),
            offset: self.offset(),
        }
    }

    fn label(&mut self) -> Result<String, PatternError> {
        self.skip_ws();
        let mut label = String::new();
        while let Some((_, c)) = self.peek() {
            let ok = if label.is_empty() {
                c.is_alphabetic() || c == '_'
            } else {
                c.is_alphanumeric() || c == '_' || c == '\''
            };
            if !ok {
                break;
            }
            label.push(c);
            self.at += 1;
        }
        if label.is_empty() {
            return Err(self.unexpected());
        }
        Ok(label)
    }

    fn position(&mut self, parent: Option<usize>, slot: Slot) -> Result<(), PatternError> {
        let label = self.label()?;
        if self.positions.iter().any(|p| p.label == label) {
            return Err(PatternError::DuplicateLabel(label));
        }
        let index = self.positions.len();
        self.positions.push(Position {
            label,
            parent,
            slot,
            min_children: 0,
        });

        self.skip_ws();
        let close = match self.peek() {
            Some((_, '(')) => ')',
            Some((_, '{')) => '}',
            _ => return Ok(()),
        };
        self.at += 1;
        self.skip_ws();
        if self.peek().is_some_and(|(_, c)| c == close) {
            return Err(PatternError::EmptyChildren(self.positions[index].label.clone()));
        }

        let mut count = 0;
        loop {
            let child_slot = if close == ')' { Slot::Fixed(count) } else { Slot::Free };
            self.position(Some(index), child_slot)?;
            count += 1;
            self.skip_ws();
            match self.peek() {
                Some((_, ',')) => self.at += 1,
                Some((_, c)) if c == close => {
                    self.at += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.positions[index].min_children = count;
        Ok(())
    }
}
