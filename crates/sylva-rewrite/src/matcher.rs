//! Typed matching.
//!
//! Once a pattern has bound every position structurally, each bound node is
//! checked against the rule's expected variant for that position, and the
//! optional guard is evaluated over a read-only [`Match`] view. A failure
//! at any step is the ordinary "does not apply here" outcome.

use sylva_core::{Kind, Literal, Node, Path, VarIndex};

use crate::pattern::Pattern;

/// The variant a bound position must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expect {
    /// Any node.
    Any,
    /// Exactly this variant.
    Is(Kind),
    /// A number or boolean constant.
    Constant,
    /// Any node that is not a leaf variant.
    Operator,
}

impl Expect {
    /// Returns true if `node` satisfies this expectation.
    #[must_use]
    pub fn accepts(self, node: &Node) -> bool {
        match self {
            Expect::Any => true,
            Expect::Is(kind) => node.kind() == kind,
            Expect::Constant => matches!(node.kind(), Kind::Number | Kind::Bool),
            Expect::Operator => !node.is_leaf(),
        }
    }
}

impl From<Kind> for Expect {
    fn from(kind: Kind) -> Self {
        Expect::Is(kind)
    }
}

/// A guard predicate over a typed match.
pub type Guard = Box<dyn Fn(&Match<'_>) -> bool + Send + Sync>;

/// A read-only view of a successful structural and variant match.
#[derive(Clone, Copy)]
pub struct Match<'t> {
    root: &'t Node,
    pattern: &'t Pattern,
    paths: &'t [Path],
}

impl<'t> Match<'t> {
    pub(crate) fn new(root: &'t Node, pattern: &'t Pattern, paths: &'t [Path]) -> Self {
        Self {
            root,
            pattern,
            paths,
        }
    }

    /// Returns the node bound to `label`.
    #[must_use]
    pub fn node(&self, label: &str) -> Option<&'t Node> {
        let i = self.pattern.index_of(label)?;
        self.root.at(&self.paths[i])
    }

    /// Returns the path of `label`, relative to the match root.
    #[must_use]
    pub fn path(&self, label: &str) -> Option<&'t Path> {
        let i = self.pattern.index_of(label)?;
        self.paths.get(i)
    }

    /// Returns the numeric payload bound to `label`.
    #[must_use]
    pub fn number(&self, label: &str) -> Option<f64> {
        self.node(label)?.as_number()
    }

    /// Returns the boolean payload bound to `label`.
    #[must_use]
    pub fn boolean(&self, label: &str) -> Option<bool> {
        self.node(label)?.as_bool()
    }

    /// Returns the variable index bound to `label`.
    #[must_use]
    pub fn variable(&self, label: &str) -> Option<VarIndex> {
        self.node(label)?.as_variable()
    }

    /// Returns the literal bound to `label`.
    #[must_use]
    pub fn literal(&self, label: &str) -> Option<&'t Literal> {
        self.node(label)?.as_literal()
    }

    /// Returns true if `label` is bound to the number `value`.
    #[must_use]
    pub fn is_number(&self, label: &str, value: f64) -> bool {
        self.node(label).is_some_and(|n| n.is_number(value))
    }
}

/// Checks bound nodes against `expects` in declaration order, then the guard.
///
/// Stops at the first mismatch; never mutates anything.
pub(crate) fn accepts(
    root: &Node,
    pattern: &Pattern,
    paths: &[Path],
    expects: &[Expect],
    guard: Option<&Guard>,
) -> bool {
    let typed = expects.iter().zip(paths).all(|(expect, path)| {
        root.at(path).is_some_and(|node| expect.accepts(node))
    });
    if !typed {
        return false;
    }
    guard.map_or(true, |guard| guard(&Match::new(root, pattern, paths)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_accepts() {
        assert!(Expect::Any.accepts(&Node::var(0)));
        assert!(Expect::Is(Kind::Number).accepts(&Node::number(0.0)));
        assert!(!Expect::Is(Kind::Number).accepts(&Node::boolean(false)));
        assert!(Expect::Constant.accepts(&Node::boolean(false)));
        assert!(Expect::Constant.accepts(&Node::number(3.0)));
        assert!(!Expect::Constant.accepts(&Node::var(0)));
        assert!(Expect::Operator.accepts(&Node::negate(Node::var(0))));
        assert!(!Expect::Operator.accepts(&Node::var(0)));
        assert_eq!(Expect::from(Kind::Plus), Expect::Is(Kind::Plus));
    }

    #[test]
    fn test_accepts_checks_in_order() {
        let pattern = Pattern::parse("p(a, b)").unwrap();
        let expr = Node::product(Node::number(0.0), Node::var(2));
        let paths = pattern.first_binding(&expr).unwrap();

        let good = [Kind::Product.into(), Kind::Number.into(), Expect::Any];
        assert!(accepts(&expr, &pattern, &paths, &good, None));

        let bad = [Kind::Plus.into(), Kind::Number.into(), Expect::Any];
        assert!(!accepts(&expr, &pattern, &paths, &bad, None));
    }

    #[test]
    fn test_guard_reads_payloads() {
        let pattern = Pattern::parse("p(a, b)").unwrap();
        let expr = Node::product(Node::number(0.0), Node::var(2));
        let paths = pattern.first_binding(&expr).unwrap();
        let expects = [Expect::Any, Kind::Number.into(), Kind::Variable.into()];

        let zero: Guard = Box::new(|m| m.is_number("a", 0.0) && m.variable("b") == Some(VarIndex::new(2)));
        assert!(accepts(&expr, &pattern, &paths, &expects, Some(&zero)));

        let one: Guard = Box::new(|m| m.number("a") == Some(1.0));
        assert!(!accepts(&expr, &pattern, &paths, &expects, Some(&one)));

        let m = Match::new(&expr, &pattern, &paths);
        assert_eq!(m.path("b"), Some(&Path::root().child(1)));
        assert!(m.node("missing").is_none());
        assert!(m.literal("a").is_none());
    }
}
