//! The resolution inference rule.
//!
//! Given two distinct clauses `A` and `C` under a common parent, with a
//! literal `B` in `A` and a literal `D` in `C` that are complementary and
//! unify, the rule applies the unifier across both clauses and removes `B`
//! from `A` and `D` from `C`. Both clauses are shrunk in place; no merged
//! resolvent clause is produced.

use sylva_core::{Kind, Node};
use sylva_rewrite::{Expect, Rule, RuleError, Tag};

use crate::unifier::Unifier;

/// Builds the resolution rule with the default [`Unifier`].
///
/// # Errors
///
/// Never fails in practice; the error type is that of [`Rule::builder`].
pub fn resolution_rule() -> Result<Rule, RuleError> {
    resolution_rule_with(Unifier::new())
}

/// Builds the resolution rule around a specific unifier.
///
/// # Errors
///
/// Never fails in practice; the error type is that of [`Rule::builder`].
pub fn resolution_rule_with(unifier: Unifier) -> Result<Rule, RuleError> {
    Rule::builder("resolution")
        .tags([Tag::Logic, Tag::Resolution, Tag::Deductive])
        .pattern("set{a{b}, c{d}}")
        .expect([
            Expect::Any,
            Kind::Clause.into(),
            Kind::Predicate.into(),
            Kind::Clause.into(),
            Kind::Predicate.into(),
        ])
        .guard(move |m| match (m.literal("b"), m.literal("d")) {
            (Some(b), Some(d)) => unifier.can_unify(b, d),
            _ => false,
        })
        .action(move |rw| {
            let subst = unifier
                .compute(rw.literal("b")?, rw.literal("d")?)
                .ok_or_else(|| rw.fail("literals no longer unify"))?;
            let b = rw.child_index("b")?;
            let d = rw.child_index("d")?;

            let mut a = rw.take("a")?;
            let mut c = rw.take("c")?;
            for (clause, index) in [(&mut a, b), (&mut c, d)] {
                if let Node::Clause(literals) = clause {
                    literals.remove(index);
                }
                subst.apply_node(clause);
            }
            rw.replace("a", a)?;
            rw.replace("c", c)
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_core::{Literal, Term};
    use sylva_rewrite::{Driver, RuleSet, StopReason};

    fn lit(negated: bool, name: &str, args: Vec<Term>) -> Node {
        Node::predicate(Literal {
            name: name.to_string(),
            args,
            negated,
        })
    }

    #[test]
    fn test_complementary_units_become_empty() {
        let args = vec![Term::constant("a")];
        let mut set = Node::clause_set(vec![
            Node::clause(vec![lit(false, "P", args.clone())]),
            Node::clause(vec![lit(true, "P", args)]),
        ]);
        let rule = resolution_rule().unwrap();
        assert!(rule.apply(&mut set).unwrap());
        assert_eq!(
            set,
            Node::clause_set(vec![Node::clause(vec![]), Node::clause(vec![])])
        );
        assert!(!rule.matches(&set));
    }

    #[test]
    fn test_substitution_reaches_sibling_literals() {
        // P(X0) | Q(X0)   and   ~P(a) | R(X1)
        let mut set = Node::clause_set(vec![
            Node::clause(vec![
                lit(false, "P", vec![Term::var(0)]),
                lit(false, "Q", vec![Term::var(0)]),
            ]),
            Node::clause(vec![
                lit(true, "P", vec![Term::constant("a")]),
                lit(false, "R", vec![Term::var(1)]),
            ]),
        ]);
        let rule = resolution_rule().unwrap();
        assert!(rule.apply(&mut set).unwrap());
        assert_eq!(set.to_string(), "(clauses (clause Q(a)) (clause R(X1)))");
    }

    #[test]
    fn test_does_not_fire_on_same_polarity() {
        let mut set = Node::clause_set(vec![
            Node::clause(vec![lit(false, "P", vec![Term::var(0)])]),
            Node::clause(vec![lit(false, "P", vec![Term::constant("a")])]),
        ]);
        let before = set.clone();
        let rule = resolution_rule().unwrap();
        assert!(!rule.apply(&mut set).unwrap());
        assert_eq!(set, before);
    }

    #[test]
    fn test_occurs_check_blocks_cyclic_resolution() {
        let set = Node::clause_set(vec![
            Node::clause(vec![lit(false, "P", vec![Term::var(0)])]),
            Node::clause(vec![lit(
                true,
                "P",
                vec![Term::app("f", vec![Term::var(0)])],
            )]),
        ]);
        assert!(resolution_rule().unwrap().matches(&set));
        let strict = resolution_rule_with(Unifier::new().with_occurs_check(true)).unwrap();
        assert!(!strict.matches(&set));
    }

    #[test]
    fn test_driver_reaches_fixpoint() {
        let mut set = Node::clause_set(vec![
            Node::clause(vec![
                lit(false, "P", vec![Term::var(0)]),
                lit(false, "Q", vec![Term::var(0)]),
            ]),
            Node::clause(vec![lit(true, "P", vec![Term::constant("a")])]),
            Node::clause(vec![lit(true, "Q", vec![Term::constant("a")])]),
        ]);
        let rules: RuleSet = [resolution_rule().unwrap()].into_iter().collect();
        let stats = Driver::new(rules).run(&mut set).unwrap();
        assert_eq!(stats.stop_reason, StopReason::Saturated);
        assert!(stats.rewrites >= 1);
        assert!(!resolution_rule().unwrap().matches(&set));
    }
}
