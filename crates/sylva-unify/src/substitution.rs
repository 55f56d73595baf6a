//! Substitutions.
//!
//! A [`Substitution`] maps first-order variables to terms. Substitutions
//! produced by the unifier are idempotent: no bound term mentions a bound
//! variable, so applying one is a single pass over the target. The only
//! exception is a cyclic binding such as `X0 ↦ f(X0)`, which can arise when
//! unifying without the occurs check; such a binding is kept as-is.

use std::fmt;

use hashbrown::HashMap;
use sylva_core::{Literal, Node, Term, VarIndex};

/// A finite mapping from variables to terms.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashMap<VarIndex, Term>,
}

impl Substitution {
    /// Creates the empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an idempotent substitution from triangular bindings, where a
    /// bound term may still mention other bound variables.
    ///
    /// Cycles are cut where they close: the variable that closes a cycle
    /// is left in place.
    #[must_use]
    pub fn resolve(triangular: &HashMap<VarIndex, Term>) -> Self {
        let mut stack = Vec::new();
        let bindings = triangular
            .iter()
            .map(|(var, term)| {
                stack.push(*var);
                let resolved = resolve_term(term, triangular, &mut stack);
                stack.pop();
                (*var, resolved)
            })
            .collect();
        Self { bindings }
    }

    /// Returns the term bound to `var`.
    #[must_use]
    pub fn get(&self, var: VarIndex) -> Option<&Term> {
        self.bindings.get(&var)
    }

    /// Returns true if `var` is bound.
    #[must_use]
    pub fn contains(&self, var: VarIndex) -> bool {
        self.bindings.contains_key(&var)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (VarIndex, &Term)> {
        self.bindings.iter().map(|(v, t)| (*v, t))
    }

    /// Returns true if no bound term mentions a bound variable.
    #[must_use]
    pub fn is_idempotent(&self) -> bool {
        self.bindings.values().all(|term| {
            let mut clean = true;
            term.for_each_var(&mut |v| clean &= !self.contains(v));
            clean
        })
    }

    /// Applies the substitution to a term.
    #[must_use]
    pub fn apply_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(v) => self.bindings.get(v).cloned().unwrap_or_else(|| term.clone()),
            Term::App { symbol, args } => Term::App {
                symbol: symbol.clone(),
                args: args.iter().map(|arg| self.apply_term(arg)).collect(),
            },
        }
    }

    /// Applies the substitution to the arguments of a literal.
    pub fn apply_literal(&self, literal: &mut Literal) {
        for arg in &mut literal.args {
            *arg = self.apply_term(arg);
        }
    }

    /// Applies the substitution to every predicate in the subtree.
    pub fn apply_node(&self, node: &mut Node) {
        if let Node::Predicate(literal) = node {
            self.apply_literal(literal);
        }
        for child in node.children_mut() {
            self.apply_node(child);
        }
    }
}

/// Rewrites every variable occurrence anywhere inside `clause` to its bound
/// term, so that variables shared between literals stay consistent.
pub fn apply_substitution(clause: &mut Node, substitution: &Substitution) {
    substitution.apply_node(clause);
}

fn resolve_term(term: &Term, triangular: &HashMap<VarIndex, Term>, stack: &mut Vec<VarIndex>) -> Term {
    match term {
        Term::Var(v) => match triangular.get(v) {
            Some(bound) if !stack.contains(v) => {
                stack.push(*v);
                let resolved = resolve_term(bound, triangular, stack);
                stack.pop();
                resolved
            }
            _ => term.clone(),
        },
        Term::App { symbol, args } => Term::App {
            symbol: symbol.clone(),
            args: args
                .iter()
                .map(|arg| resolve_term(arg, triangular, stack))
                .collect(),
        },
    }
}

impl FromIterator<(VarIndex, Term)> for Substitution {
    /// Collects bindings, resolving them against each other.
    fn from_iter<I: IntoIterator<Item = (VarIndex, Term)>>(iter: I) -> Self {
        Self::resolve(&iter.into_iter().collect())
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_by_key(|(v, _)| **v);
        f.debug_map()
            .entries(entries.into_iter().map(|(v, t)| (format!("X{v}"), t.to_string())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x(i: u32) -> Term {
        Term::var(i)
    }

    #[test]
    fn test_resolve_chains() {
        // X0 -> f(X1), X1 -> a
        let subst: Substitution = [
            (VarIndex::new(0), Term::app("f", vec![x(1)])),
            (VarIndex::new(1), Term::constant("a")),
        ]
        .into_iter()
        .collect();

        assert!(subst.is_idempotent());
        assert_eq!(
            subst.get(VarIndex::new(0)),
            Some(&Term::app("f", vec![Term::constant("a")]))
        );
    }

    #[test]
    fn test_cycle_is_cut() {
        let subst: Substitution = [(VarIndex::new(0), Term::app("f", vec![x(0)]))]
            .into_iter()
            .collect();
        assert_eq!(subst.get(VarIndex::new(0)), Some(&Term::app("f", vec![x(0)])));
        assert!(!subst.is_idempotent());
    }

    #[test]
    fn test_apply_across_clause() {
        let subst: Substitution = [(VarIndex::new(0), Term::constant("a"))].into_iter().collect();
        let mut clause = Node::clause(vec![
            Node::predicate(Literal::positive("P", vec![x(0)])),
            Node::predicate(Literal::negative("Q", vec![x(0), x(1)])),
        ]);
        apply_substitution(&mut clause, &subst);
        assert_eq!(clause.to_string(), "(clause P(a) ~Q(a, X1))");
    }

    #[test]
    fn test_empty() {
        let subst = Substitution::new();
        assert!(subst.is_empty());
        assert_eq!(subst.apply_term(&x(3)), x(3));
        assert_eq!(format!("{subst:?}"), "{}");
    }
}
