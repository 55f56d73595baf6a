//! Numeric evaluation of algebraic trees.

use crate::node::{Constant, Node};

impl Node {
    /// Evaluates an algebraic tree, reading variable `i` from `env[i]`.
    ///
    /// Returns `None` for logical or predicate nodes, for unevaluated
    /// derivative operators and for variables outside `env`.
    #[must_use]
    pub fn eval(&self, env: &[f64]) -> Option<f64> {
        match self {
            Node::Constant(Constant::Number(n)) => Some(*n),
            Node::Variable(v) => env.get(v.index() as usize).copied(),
            Node::Negate(x) => Some(-x.eval(env)?),
            Node::Ln(x) => Some(x.eval(env)?.ln()),
            Node::Plus(xs) => Some(xs[0].eval(env)? + xs[1].eval(env)?),
            Node::Product(xs) => Some(xs[0].eval(env)? * xs[1].eval(env)?),
            Node::Power(xs) => Some(xs[0].eval(env)?.powf(xs[1].eval(env)?)),
            _ => None,
        }
    }

    /// Evaluates a propositional tree, reading variable `i` from `env[i]`.
    ///
    /// Predicate nodes and clauses are not evaluated.
    #[must_use]
    pub fn eval_bool(&self, env: &[bool]) -> Option<bool> {
        match self {
            Node::Constant(Constant::Bool(b)) => Some(*b),
            Node::Variable(v) => env.get(v.index() as usize).copied(),
            Node::Not(x) => Some(!x.eval_bool(env)?),
            Node::And(xs) => Some(xs[0].eval_bool(env)? && xs[1].eval_bool(env)?),
            Node::Or(xs) => Some(xs[0].eval_bool(env)? || xs[1].eval_bool(env)?),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_numeric() {
        // (2 + x0) * x1^2
        let expr = Node::product(
            Node::plus(Node::number(2.0), Node::var(0)),
            Node::power(Node::var(1), Node::number(2.0)),
        );
        assert_eq!(expr.eval(&[1.0, 3.0]), Some(27.0));
        assert_eq!(expr.eval(&[1.0]), None);
    }

    #[test]
    fn test_eval_rejects_derivative() {
        let d = Node::differentiate(Node::var(0), Node::var(0));
        assert_eq!(d.eval(&[1.0]), None);
    }

    #[test]
    fn test_eval_bool() {
        let expr = Node::or(Node::var(0), Node::not(Node::var(1)));
        assert_eq!(expr.eval_bool(&[false, false]), Some(true));
        assert_eq!(expr.eval_bool(&[false, true]), Some(false));
    }
}
