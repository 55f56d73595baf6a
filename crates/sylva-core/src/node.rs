//! Expression node types.
//!
//! This module defines the tree element every other part of sylva works
//! on. Each node owns its children, so a subtree is reachable from exactly
//! one parent slot; placing the same expression twice requires an explicit
//! [`Clone`].

use std::fmt;
use std::slice;

use crate::term::Literal;
use crate::var::VarIndex;

/// A literal constant payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    /// A numeric constant.
    Number(f64),
    /// A boolean constant.
    Bool(bool),
}

/// The variant tag of a [`Node`], without payload or children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Constant(Number(_))`.
    Number,
    /// `Constant(Bool(_))`.
    Bool,
    /// A bound-variable reference.
    Variable,
    /// A first-order predicate term.
    Predicate,
    /// Arithmetic negation.
    Negate,
    /// Natural logarithm.
    Ln,
    /// Logical negation.
    Not,
    /// Binary sum.
    Plus,
    /// Binary product.
    Product,
    /// Power: base, exponent.
    Power,
    /// Derivative operator: expression, variable.
    Differentiate,
    /// Binary conjunction.
    And,
    /// Binary disjunction.
    Or,
    /// N-ary disjunction of literals.
    Clause,
    /// N-ary conjunction of clauses.
    ClauseSet,
}

impl Kind {
    /// Returns true for variants that never have children.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Kind::Number | Kind::Bool | Kind::Variable | Kind::Predicate
        )
    }
}

/// An expression tree node.
///
/// Leaves carry a payload, operators own their children. Binary operators
/// keep both operands in a single boxed array so that children can be
/// exposed uniformly as a slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // === Leaves ===
    /// A literal constant.
    Constant(Constant),
    /// A reference to a bound variable.
    Variable(VarIndex),
    /// A first-order predicate term with polarity.
    Predicate(Literal),

    // === Unary ===
    /// `-x`.
    Negate(Box<Node>),
    /// `ln(x)`.
    Ln(Box<Node>),
    /// `¬x`.
    Not(Box<Node>),

    // === Binary ===
    /// `a + b`.
    Plus(Box<[Node; 2]>),
    /// `a · b`.
    Product(Box<[Node; 2]>),
    /// `a ^ b`.
    Power(Box<[Node; 2]>),
    /// `d(expr)/d(var)`.
    ///
    /// The second child is the variable of differentiation.
    Differentiate(Box<[Node; 2]>),
    /// `a ∧ b`.
    And(Box<[Node; 2]>),
    /// `a ∨ b`.
    Or(Box<[Node; 2]>),

    // === N-ary ===
    /// A disjunction of literals. The empty clause denotes a contradiction.
    Clause(Vec<Node>),
    /// A conjunction of clauses.
    ClauseSet(Vec<Node>),
}

impl Node {
    // === Constructors ===

    /// Creates a numeric constant.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Node::Constant(Constant::Number(value))
    }

    /// Creates a boolean constant.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Node::Constant(Constant::Bool(value))
    }

    /// Creates a bound-variable reference.
    #[must_use]
    pub fn var(index: u32) -> Self {
        Node::Variable(VarIndex::new(index))
    }

    /// Creates a predicate node.
    #[must_use]
    pub fn predicate(literal: Literal) -> Self {
        Node::Predicate(literal)
    }

    /// Creates `-x`.
    #[must_use]
    pub fn negate(x: Node) -> Self {
        Node::Negate(Box::new(x))
    }

    /// Creates `ln(x)`.
    #[must_use]
    pub fn ln(x: Node) -> Self {
        Node::Ln(Box::new(x))
    }

    /// Creates `¬x`.
    #[must_use]
    pub fn not(x: Node) -> Self {
        Node::Not(Box::new(x))
    }

    /// Creates `a + b`.
    #[must_use]
    pub fn plus(a: Node, b: Node) -> Self {
        Node::Plus(Box::new([a, b]))
    }

    /// Creates `a · b`.
    #[must_use]
    pub fn product(a: Node, b: Node) -> Self {
        Node::Product(Box::new([a, b]))
    }

    /// Creates `base ^ exp`.
    #[must_use]
    pub fn power(base: Node, exp: Node) -> Self {
        Node::Power(Box::new([base, exp]))
    }

    /// Creates the derivative of `expr` with respect to `var`.
    #[must_use]
    pub fn differentiate(expr: Node, var: Node) -> Self {
        Node::Differentiate(Box::new([expr, var]))
    }

    /// Creates `a ∧ b`.
    #[must_use]
    pub fn and(a: Node, b: Node) -> Self {
        Node::And(Box::new([a, b]))
    }

    /// Creates `a ∨ b`.
    #[must_use]
    pub fn or(a: Node, b: Node) -> Self {
        Node::Or(Box::new([a, b]))
    }

    /// Creates a clause from its literals.
    #[must_use]
    pub fn clause(literals: Vec<Node>) -> Self {
        Node::Clause(literals)
    }

    /// Creates a clause set from its clauses.
    #[must_use]
    pub fn clause_set(clauses: Vec<Node>) -> Self {
        Node::ClauseSet(clauses)
    }

    // === Inspection ===

    /// Returns the variant tag of this node.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Node::Constant(Constant::Number(_)) => Kind::Number,
            Node::Constant(Constant::Bool(_)) => Kind::Bool,
            Node::Variable(_) => Kind::Variable,
            Node::Predicate(_) => Kind::Predicate,
            Node::Negate(_) => Kind::Negate,
            Node::Ln(_) => Kind::Ln,
            Node::Not(_) => Kind::Not,
            Node::Plus(_) => Kind::Plus,
            Node::Product(_) => Kind::Product,
            Node::Power(_) => Kind::Power,
            Node::Differentiate(_) => Kind::Differentiate,
            Node::And(_) => Kind::And,
            Node::Or(_) => Kind::Or,
            Node::Clause(_) => Kind::Clause,
            Node::ClauseSet(_) => Kind::ClauseSet,
        }
    }

    /// Returns true if this node has no children by construction.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// Returns the numeric payload of a number constant.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Constant(Constant::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the payload of a boolean constant.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Constant(Constant::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the index of a variable reference.
    #[must_use]
    pub fn as_variable(&self) -> Option<VarIndex> {
        match self {
            Node::Variable(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the literal of a predicate node.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Predicate(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true if this is the numeric constant `value`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns the ordered children of this node.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Constant(_) | Node::Variable(_) | Node::Predicate(_) => &[],
            Node::Negate(x) | Node::Ln(x) | Node::Not(x) => slice::from_ref(&**x),
            Node::Plus(xs)
            | Node::Product(xs)
            | Node::Power(xs)
            | Node::Differentiate(xs)
            | Node::And(xs)
            | Node::Or(xs) => &xs[..],
            Node::Clause(xs) | Node::ClauseSet(xs) => xs,
        }
    }

    /// Returns the ordered children of this node, mutably.
    ///
    /// The number of children cannot change through this view; only whole
    /// subtrees can be swapped.
    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Constant(_) | Node::Variable(_) | Node::Predicate(_) => &mut [],
            Node::Negate(x) | Node::Ln(x) | Node::Not(x) => slice::from_mut(&mut **x),
            Node::Plus(xs)
            | Node::Product(xs)
            | Node::Power(xs)
            | Node::Differentiate(xs)
            | Node::And(xs)
            | Node::Or(xs) => &mut xs[..],
            Node::Clause(xs) | Node::ClauseSet(xs) => xs,
        }
    }

    /// Returns the number of nodes in this subtree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }

    /// Returns the height of this subtree (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl From<Constant> for Node {
    fn from(c: Constant) -> Self {
        Node::Constant(c)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Predicate(lit)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Number(n) => write!(f, "{n}"),
            Constant::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Renders the node as an s-expression, e.g. `(+ 2 x0)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = match self {
            Node::Constant(c) => return write!(f, "{c}"),
            Node::Variable(v) => return write!(f, "x{v}"),
            Node::Predicate(lit) => return write!(f, "{lit}"),
            Node::Negate(_) => "neg",
            Node::Ln(_) => "ln",
            Node::Not(_) => "not",
            Node::Plus(_) => "+",
            Node::Product(_) => "*",
            Node::Power(_) => "^",
            Node::Differentiate(_) => "d",
            Node::And(_) => "and",
            Node::Or(_) => "or",
            Node::Clause(_) => "clause",
            Node::ClauseSet(_) => "clauses",
        };
        write!(f, "({head}")?;
        for child in self.children() {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}
