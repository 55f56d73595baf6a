//! Rewrite actions.
//!
//! A [`Rewrite`] is the only way to mutate a tree from a rule. It exists
//! only for the duration of an action on a successful match and addresses
//! nodes through the labels the rule's pattern declared.
//!
//! Replacing or taking a position discards the subtree that was there, so
//! every bound position below it becomes detached; touching a detached
//! position is a [`RewriteError`]. A taken position must be refilled by a
//! later `replace` of itself or of an ancestor before the action returns.

use sylva_core::{Constant, Literal, Node, Path, VarIndex};

use crate::error::{invalid_path, RewriteError};
use crate::pattern::Pattern;

/// A rewrite action.
pub type Action = Box<dyn Fn(&mut Rewrite<'_>) -> Result<(), RewriteError> + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Live,
    Vacated,
    Detached,
}

/// Mutable access to the positions bound by a match.
pub struct Rewrite<'t> {
    rule: &'t str,
    root: &'t mut Node,
    pattern: &'t Pattern,
    paths: Vec<Path>,
    states: Vec<State>,
}

impl<'t> Rewrite<'t> {
    pub(crate) fn new(rule: &'t str, root: &'t mut Node, pattern: &'t Pattern, paths: Vec<Path>) -> Self {
        let states = vec![State::Live; paths.len()];
        Self {
            rule,
            root,
            pattern,
            paths,
            states,
        }
    }

    /// Returns the name of the rule being applied.
    #[must_use]
    pub fn rule(&self) -> &str {
        self.rule
    }

    fn index(&self, label: &str) -> Result<usize, RewriteError> {
        self.pattern
            .index_of(label)
            .ok_or_else(|| RewriteError::UnknownLabel {
                rule: self.rule.to_string(),
                label: label.to_string(),
            })
    }

    fn live(&self, label: &str) -> Result<usize, RewriteError> {
        let i = self.index(label)?;
        match self.states[i] {
            State::Live => Ok(i),
            State::Vacated => Err(RewriteError::Vacated {
                rule: self.rule.to_string(),
                label: label.to_string(),
            }),
            State::Detached => Err(RewriteError::Detached {
                rule: self.rule.to_string(),
                label: label.to_string(),
            }),
        }
    }

    fn detach_below(&mut self, i: usize) {
        for j in 0..self.paths.len() {
            if self.paths[j].is_below(&self.paths[i]) {
                self.states[j] = State::Detached;
            }
        }
    }

    fn slot(&mut self, i: usize) -> Result<&mut Node, RewriteError> {
        let path = &self.paths[i];
        self.root
            .at_mut(path)
            .ok_or_else(|| invalid_path(self.rule, path))
    }

    /// Returns the node currently bound to `label`.
    ///
    /// # Errors
    ///
    /// Fails if the label is unknown, detached or vacated.
    pub fn node(&self, label: &str) -> Result<&Node, RewriteError> {
        let i = self.live(label)?;
        self.root
            .at(&self.paths[i])
            .ok_or_else(|| invalid_path(self.rule, &self.paths[i]))
    }

    fn wrong(&self, label: &str, wanted: &'static str, node: &Node) -> RewriteError {
        RewriteError::WrongVariant {
            rule: self.rule.to_string(),
            label: label.to_string(),
            wanted,
            found: node.kind(),
        }
    }

    /// Returns the numeric payload bound to `label`.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live or is not a number constant.
    pub fn number(&self, label: &str) -> Result<f64, RewriteError> {
        let node = self.node(label)?;
        node.as_number().ok_or_else(|| self.wrong(label, "number", node))
    }

    /// Returns the boolean payload bound to `label`.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live or is not a boolean constant.
    pub fn boolean(&self, label: &str) -> Result<bool, RewriteError> {
        let node = self.node(label)?;
        node.as_bool().ok_or_else(|| self.wrong(label, "boolean", node))
    }

    /// Returns the constant payload bound to `label`.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live or is not a constant.
    pub fn constant(&self, label: &str) -> Result<Constant, RewriteError> {
        let node = self.node(label)?;
        match node {
            Node::Constant(c) => Ok(*c),
            _ => Err(self.wrong(label, "constant", node)),
        }
    }

    /// Returns the variable index bound to `label`.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live or is not a variable reference.
    pub fn variable(&self, label: &str) -> Result<VarIndex, RewriteError> {
        let node = self.node(label)?;
        node.as_variable()
            .ok_or_else(|| self.wrong(label, "variable", node))
    }

    /// Returns the literal bound to `label`.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live or is not a predicate.
    pub fn literal(&self, label: &str) -> Result<&Literal, RewriteError> {
        let node = self.node(label)?;
        node.as_literal()
            .ok_or_else(|| self.wrong(label, "predicate", node))
    }

    /// Returns the index of `label` within its parent node.
    ///
    /// # Errors
    ///
    /// Fails if the label is unknown or names the match root.
    pub fn child_index(&self, label: &str) -> Result<usize, RewriteError> {
        let i = self.live(label)?;
        self.paths[i]
            .last()
            .ok_or_else(|| invalid_path(self.rule, &self.paths[i]))
    }

    /// Returns an independent deep copy of the subtree at `label`.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live.
    pub fn copy_of(&self, label: &str) -> Result<Node, RewriteError> {
        self.node(label).cloned()
    }

    /// Builds a [`RewriteError::Failed`] for this rule.
    #[must_use]
    pub fn fail(&self, reason: impl Into<String>) -> RewriteError {
        RewriteError::Failed {
            rule: self.rule.to_string(),
            reason: reason.into(),
        }
    }

    /// Moves the subtree at `label` out of the tree.
    ///
    /// The position stays vacated until it, or an ancestor, is replaced.
    ///
    /// # Errors
    ///
    /// Fails if the position is not live.
    pub fn take(&mut self, label: &str) -> Result<Node, RewriteError> {
        let i = self.live(label)?;
        let taken = std::mem::replace(self.slot(i)?, Node::boolean(false));
        self.states[i] = State::Vacated;
        self.detach_below(i);
        Ok(taken)
    }

    /// Replaces the subtree at `label` with `node`, discarding the old one.
    ///
    /// Vacated positions may be refilled this way.
    ///
    /// # Errors
    ///
    /// Fails if the label is unknown or detached.
    pub fn replace(&mut self, label: &str, node: Node) -> Result<(), RewriteError> {
        let i = self.index(label)?;
        if self.states[i] == State::Detached {
            return Err(RewriteError::Detached {
                rule: self.rule.to_string(),
                label: label.to_string(),
            });
        }
        *self.slot(i)? = node;
        self.states[i] = State::Live;
        self.detach_below(i);
        Ok(())
    }

    /// Checks that no taken position was left unfilled.
    pub(crate) fn finish(self) -> Result<(), RewriteError> {
        match self.states.iter().position(|s| *s == State::Vacated) {
            Some(i) => Err(RewriteError::Vacated {
                rule: self.rule.to_string(),
                label: self.pattern.positions()[i].label.clone(),
            }),
            None => Ok(()),
        }
    }
}
