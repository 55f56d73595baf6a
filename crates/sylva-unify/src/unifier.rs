//! Most-general-unifier computation.
//!
//! Unification runs over an explicit worklist of term pairs. Each pair is
//! dereferenced through the bindings made so far: an unbound variable on
//! either side is bound to the other side, two applications must agree on
//! symbol and arity and push their argument pairs, anything else fails.
//!
//! The occurs check is off by default. Without it, unifying `X0` with
//! `f(X0)` succeeds and yields the cyclic binding `X0 ↦ f(X0)`, which does
//! not denote a finite term; resolution over such a binding is unsound.
//! Every dereferenced pair is visited at most once, so unification still
//! terminates in that case.

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;
use sylva_core::{Literal, Term, VarIndex};
use tracing::trace;

use crate::substitution::Substitution;

/// A configurable unification procedure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unifier {
    /// Reject bindings of a variable to a term containing it.
    pub occurs_check: bool,
}

impl Unifier {
    /// Creates a unifier without the occurs check.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            occurs_check: false,
        }
    }

    /// Returns the unifier with the occurs check switched on or off.
    #[must_use]
    pub const fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }

    /// Returns true if `a` and `b` have opposite polarity and their
    /// argument lists unify.
    #[must_use]
    pub fn can_unify(&self, a: &Literal, b: &Literal) -> bool {
        a.is_complementary(b) && self.compute(a, b).is_some()
    }

    /// Computes the most general unifier of two literals, ignoring polarity.
    ///
    /// Returns `None` when the predicate names or arities differ or the
    /// arguments cannot be unified.
    #[must_use]
    pub fn compute(&self, a: &Literal, b: &Literal) -> Option<Substitution> {
        if a.name != b.name || a.arity() != b.arity() {
            trace!(left = %a, right = %b, "predicate mismatch");
            return None;
        }
        self.unify_terms(&a.args, &b.args)
    }

    /// Unifies two argument lists pairwise.
    #[must_use]
    pub fn unify_terms(&self, left: &[Term], right: &[Term]) -> Option<Substitution> {
        if left.len() != right.len() {
            return None;
        }

        let mut bindings: HashMap<VarIndex, Term> = HashMap::new();
        let mut seen: HashSet<(Term, Term)> = HashSet::new();
        let mut worklist: SmallVec<[(Term, Term); 16]> = left
            .iter()
            .zip(right)
            .rev()
            .map(|(l, r)| (l.clone(), r.clone()))
            .collect();

        while let Some((a, b)) = worklist.pop() {
            let a = deref(&a, &bindings);
            let b = deref(&b, &bindings);
            if a == b || !seen.insert((a.clone(), b.clone())) {
                continue;
            }

            match (a, b) {
                (Term::Var(var), term) | (term, Term::Var(var)) => {
                    if self.occurs_check && occurs(var, &term, &bindings) {
                        trace!(var = %var, term = %term, "occurs check failed");
                        return None;
                    }
                    bindings.insert(var, term);
                }
                (
                    Term::App { symbol: f, args: xs },
                    Term::App { symbol: g, args: ys },
                ) => {
                    if f != g || xs.len() != ys.len() {
                        trace!(left = %f, right = %g, "symbol mismatch");
                        return None;
                    }
                    worklist.extend(xs.into_iter().zip(ys).rev());
                }
            }
        }

        trace!(bindings = bindings.len(), "unified");
        Some(Substitution::resolve(&bindings))
    }
}

/// Follows variable bindings at the top of `term` only.
fn deref(term: &Term, bindings: &HashMap<VarIndex, Term>) -> Term {
    let mut current = term;
    while let Term::Var(v) = current {
        match bindings.get(v) {
            Some(bound) => current = bound,
            None => break,
        }
    }
    current.clone()
}

fn occurs(var: VarIndex, term: &Term, bindings: &HashMap<VarIndex, Term>) -> bool {
    let mut stack: SmallVec<[Term; 16]> = SmallVec::new();
    stack.push(term.clone());
    while let Some(t) = stack.pop() {
        match deref(&t, bindings) {
            Term::Var(v) if v == var => return true,
            Term::Var(_) => {}
            Term::App { args, .. } => stack.extend(args),
        }
    }
    false
}

/// Returns true if the literals are complementary and unify, using the
/// default [`Unifier`].
#[must_use]
pub fn can_unify(a: &Literal, b: &Literal) -> bool {
    Unifier::new().can_unify(a, b)
}

/// Computes the most general unifier of two literals with the default
/// [`Unifier`].
#[must_use]
pub fn compute_unifier(a: &Literal, b: &Literal) -> Option<Substitution> {
    Unifier::new().compute(a, b)
}
