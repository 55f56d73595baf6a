//! Propositional logic rules.

use sylva_core::{Kind, Node};
use sylva_rewrite::{Expect, Rule, RuleError, Tag};
use sylva_unify::structurally_equal;

const TAGS: [Tag; 3] = [Tag::Logic, Tag::Safe, Tag::Deductive];

/// `op{t, x}` with a boolean `t`: keep `x` when `t == keep`, otherwise the
/// whole node collapses to `t`.
fn absorb(name: &str, kind: Kind, value: bool, keep: bool) -> Result<Rule, RuleError> {
    Rule::builder(name)
        .tags(TAGS)
        .pattern("p{t, x}")
        .expect([kind.into(), Kind::Bool.into(), Expect::Any])
        .guard(move |m| m.boolean("t") == Some(value))
        .action(move |rw| {
            if keep {
                let x = rw.take("x")?;
                rw.replace("p", x)
            } else {
                rw.replace("p", Node::boolean(value))
            }
        })
        .build()
}

/// `op{x, not(y)}` with `x == y` collapses to `value`.
fn complement(name: &str, kind: Kind, value: bool) -> Result<Rule, RuleError> {
    Rule::builder(name)
        .tags(TAGS)
        .pattern("p{x, n(y)}")
        .expect([kind.into(), Expect::Any, Kind::Not.into(), Expect::Any])
        .guard(|m| match (m.node("x"), m.node("y")) {
            (Some(x), Some(y)) => structurally_equal(x, y, true),
            _ => false,
        })
        .action(move |rw| rw.replace("p", Node::boolean(value)))
        .build()
}

/// `op(x, y)` with `x == y` collapses to `x`.
fn idempotent(name: &str, kind: Kind) -> Result<Rule, RuleError> {
    Rule::builder(name)
        .tags(TAGS)
        .pattern("p(x, y)")
        .expect([kind.into(), Expect::Any, Expect::Any])
        .guard(|m| match (m.node("x"), m.node("y")) {
            (Some(x), Some(y)) => structurally_equal(x, y, true),
            _ => false,
        })
        .action(|rw| {
            let x = rw.take("x")?;
            rw.replace("p", x)
        })
        .build()
}

/// Returns the logic rules.
///
/// # Errors
///
/// Fails only if a rule table entry is malformed.
pub fn rules() -> Result<Vec<Rule>, RuleError> {
    vec![
        Rule::builder("not-not")
            .tags(TAGS)
            .pattern("n(m(x))")
            .expect([Kind::Not.into(), Kind::Not.into(), Expect::Any])
            .action(|rw| {
                let x = rw.take("x")?;
                rw.replace("n", x)
            })
            .build(),
        Rule::builder("not-constant")
            .tags(TAGS)
            .pattern("n(c)")
            .expect([Kind::Not.into(), Kind::Bool.into()])
            .action(|rw| {
                let value = !rw.boolean("c")?;
                rw.replace("n", Node::boolean(value))
            })
            .build(),

        absorb("and-true", Kind::And, true, true),
        absorb("and-false", Kind::And, false, false),
        absorb("or-false", Kind::Or, false, true),
        absorb("or-true", Kind::Or, true, false),

        // x | ~x => true
        complement("tautology", Kind::Or, true),
        // x & ~x => false
        complement("contradiction", Kind::And, false),

        idempotent("or-idempotent", Kind::Or),
        idempotent("and-idempotent", Kind::And),

        // P(t) | ~P(t) | ... => true
        Rule::builder("clause-tautology")
            .tags(TAGS)
            .pattern("c{p, q}")
            .expect([Kind::Clause.into(), Kind::Predicate.into(), Kind::Predicate.into()])
            .guard(|m| match (m.literal("p"), m.literal("q")) {
                (Some(p), Some(q)) => p.is_complementary(q) && p.name == q.name && p.args == q.args,
                _ => false,
            })
            .action(|rw| rw.replace("c", Node::boolean(true)))
            .build(),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_core::{Literal, Term};
    use sylva_rewrite::{Driver, RuleSet};

    fn simplify(expr: Node) -> Node {
        let rules: RuleSet = rules().unwrap().into_iter().collect();
        Driver::new(rules).rewrite(expr).unwrap().0
    }

    #[test]
    fn test_negation() {
        let x = Node::var(0);
        assert_eq!(simplify(Node::not(Node::not(x.clone()))), x);
        assert_eq!(simplify(Node::not(Node::boolean(false))), Node::boolean(true));
    }

    #[test]
    fn test_constant_identities() {
        let x = Node::var(0);
        assert_eq!(simplify(Node::and(Node::boolean(true), x.clone())), x);
        assert_eq!(simplify(Node::and(x.clone(), Node::boolean(false))), Node::boolean(false));
        assert_eq!(simplify(Node::or(Node::boolean(false), x.clone())), x);
        assert_eq!(simplify(Node::or(x, Node::boolean(true))), Node::boolean(true));
    }

    #[test]
    fn test_complements() {
        let x = Node::and(Node::var(0), Node::var(1));
        assert_eq!(
            simplify(Node::or(Node::not(x.clone()), x.clone())),
            Node::boolean(true)
        );
        assert_eq!(simplify(Node::and(x.clone(), Node::not(x))), Node::boolean(false));

        // Different variables are not complements
        let expr = Node::or(Node::var(0), Node::not(Node::var(1)));
        assert_eq!(simplify(expr.clone()), expr);
    }

    #[test]
    fn test_idempotence() {
        let x = Node::not(Node::var(2));
        assert_eq!(simplify(Node::or(x.clone(), x.clone())), x);
        assert_eq!(simplify(Node::and(x.clone(), x.clone())), x);
    }

    #[test]
    fn test_clause_tautology() {
        let p = Literal::positive("P", vec![Term::constant("a")]);
        let q = Literal::positive("Q", vec![Term::var(0)]);
        let clause = Node::clause(vec![
            Node::predicate(p.clone()),
            Node::predicate(q),
            Node::predicate(p.clone().negate()),
        ]);
        assert_eq!(simplify(clause), Node::boolean(true));

        let clause = Node::clause(vec![
            Node::predicate(p),
            Node::predicate(Literal::negative("P", vec![Term::constant("b")])),
        ]);
        assert_eq!(simplify(clause.clone()), clause);
    }
}
