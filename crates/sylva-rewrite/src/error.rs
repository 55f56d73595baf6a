//! Error types for rule construction and rewriting.
//!
//! Failing to match is not an error; these types only describe malformed
//! rules and contract violations inside rewrite actions.

use thiserror::Error;

use sylva_core::{Kind, NodeError, Path};

/// An error while parsing a pattern descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The descriptor is empty.
    #[error("empty pattern")]
    Empty,

    /// An unexpected character was found.
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected {
        /// The offending character, or `None` at end of input.
        found: Option<char>,
        /// Byte offset into the descriptor.
        offset: usize,
    },

    /// A child list was opened but declares no positions.
    #[error("position {0:?} declares an empty child list")]
    EmptyChildren(String),

    /// Two positions share a label.
    #[error("duplicate label {0:?}")]
    DuplicateLabel(String),
}

/// An error while assembling a rule.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The pattern descriptor is malformed.
    #[error("rule {rule:?}: {source}")]
    Pattern {
        /// The rule name.
        rule: String,
        /// The parse failure.
        #[source]
        source: PatternError,
    },

    /// The builder was not given a pattern.
    #[error("rule {0:?} has no pattern")]
    MissingPattern(String),

    /// The builder was not given an action.
    #[error("rule {0:?} has no rewrite action")]
    MissingAction(String),

    /// The expected-variant list does not cover every declared position.
    #[error("rule {rule:?} declares {positions} positions but {expected} expected variants")]
    ExpectCount {
        /// The rule name.
        rule: String,
        /// Number of declared positions.
        positions: usize,
        /// Number of expected variants supplied.
        expected: usize,
    },
}

/// A contract violation raised by a rewrite action.
///
/// These are faults in rule authoring: the tree may be left partially
/// rewritten and the driver stops the session.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RewriteError {
    /// The action named a label its pattern does not declare.
    #[error("rule {rule:?} has no position labelled {label:?}")]
    UnknownLabel {
        /// The rule name.
        rule: String,
        /// The missing label.
        label: String,
    },

    /// The position was discarded by an earlier replace or take.
    #[error("rule {rule:?}: position {label:?} is no longer part of the tree")]
    Detached {
        /// The rule name.
        rule: String,
        /// The detached label.
        label: String,
    },

    /// A subtree was taken and its slot never refilled.
    #[error("rule {rule:?}: position {label:?} was taken but never refilled")]
    Vacated {
        /// The rule name.
        rule: String,
        /// The vacated label.
        label: String,
    },

    /// A payload accessor was used on a node of a different variant.
    #[error("rule {rule:?}: position {label:?} is a {found:?}, not a {wanted}")]
    WrongVariant {
        /// The rule name.
        rule: String,
        /// The position label.
        label: String,
        /// What the accessor needed.
        wanted: &'static str,
        /// What the node actually is.
        found: Kind,
    },

    /// The action could not complete on a binding its guard accepted.
    #[error("rule {rule:?}: {reason}")]
    Failed {
        /// The rule name.
        rule: String,
        /// What went wrong.
        reason: String,
    },

    /// A bound path no longer resolves.
    #[error("rule {rule:?}: {source}")]
    Node {
        /// The rule name.
        rule: String,
        /// The navigation failure.
        #[source]
        source: NodeError,
    },
}

impl RewriteError {
    /// Returns the name of the rule that faulted.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            RewriteError::UnknownLabel { rule, .. }
            | RewriteError::Detached { rule, .. }
            | RewriteError::Vacated { rule, .. }
            | RewriteError::WrongVariant { rule, .. }
            | RewriteError::Failed { rule, .. }
            | RewriteError::Node { rule, .. } => rule,
        }
    }
}

/// Builds a navigation fault for `path`.
pub(crate) fn invalid_path(rule: &str, path: &Path) -> RewriteError {
    RewriteError::Node {
        rule: rule.to_string(),
        source: NodeError::InvalidPath(path.clone()),
    }
}
