//! Structural equality.
//!
//! Strict equality compares variables by index. Loose equality treats two
//! trees as equal when they differ only by a consistent, one-to-one
//! renaming of variables (alpha-equivalence); bound-variable references
//! and first-order variables share one renaming.
//!
//! Number constants compare by bit pattern, so a `NaN` equals itself and
//! `0.0` differs from `-0.0`.

use hashbrown::HashMap;
use sylva_core::{Constant, Literal, Node, Term, VarIndex};

/// Returns true if `a` and `b` denote the same expression.
///
/// With `strict`, variables must carry identical indices. Without it, any
/// bijective renaming of variables is accepted.
#[must_use]
pub fn structurally_equal(a: &Node, b: &Node, strict: bool) -> bool {
    Renaming::new(strict).nodes(a, b)
}

/// Returns true if two literals are equal, polarity included.
#[must_use]
pub fn literals_equal(a: &Literal, b: &Literal, strict: bool) -> bool {
    Renaming::new(strict).literals(a, b)
}

fn constants_equal(a: Constant, b: Constant) -> bool {
    match (a, b) {
        (Constant::Number(x), Constant::Number(y)) => x.to_bits() == y.to_bits(),
        (Constant::Bool(x), Constant::Bool(y)) => x == y,
        _ => false,
    }
}

/// Variable correspondence built up during one comparison. In strict mode
/// only the identity renaming is accepted.
struct Renaming {
    strict: bool,
    forward: HashMap<VarIndex, VarIndex>,
    backward: HashMap<VarIndex, VarIndex>,
}

impl Renaming {
    fn new(strict: bool) -> Self {
        Self {
            strict,
            forward: HashMap::new(),
            backward: HashMap::new(),
        }
    }

    fn vars(&mut self, a: VarIndex, b: VarIndex) -> bool {
        if self.strict {
            return a == b;
        }
        let f = *self.forward.entry(a).or_insert(b);
        let g = *self.backward.entry(b).or_insert(a);
        f == b && g == a
    }

    fn nodes(&mut self, a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Node::Variable(x), Node::Variable(y)) => self.vars(*x, *y),
            (Node::Predicate(x), Node::Predicate(y)) => self.literals(x, y),
            (Node::Constant(x), Node::Constant(y)) => constants_equal(*x, *y),
            _ => {
                a.kind() == b.kind()
                    && a.children().len() == b.children().len()
                    && a.children()
                        .iter()
                        .zip(b.children())
                        .all(|(x, y)| self.nodes(x, y))
            }
        }
    }

    fn literals(&mut self, a: &Literal, b: &Literal) -> bool {
        a.negated == b.negated
            && a.name == b.name
            && a.args.len() == b.args.len()
            && a.args.iter().zip(&b.args).all(|(x, y)| self.terms(x, y))
    }

    fn terms(&mut self, a: &Term, b: &Term) -> bool {
        match (a, b) {
            (Term::Var(x), Term::Var(y)) => self.vars(*x, *y),
            (
                Term::App { symbol: f, args: xs },
                Term::App { symbol: g, args: ys },
            ) => f == g && xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| self.terms(x, y)),
            _ => false,
        }
    }
}
