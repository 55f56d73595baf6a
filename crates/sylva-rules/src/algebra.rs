//! Algebraic simplification rules.

use sylva_core::{Kind, Node};
use sylva_rewrite::{Expect, Rule, RuleError, Tag};
use sylva_unify::structurally_equal;

const TAGS: [Tag; 3] = [Tag::Algebraic, Tag::Safe, Tag::Deductive];

/// Folds a binary operator over two number constants.
fn fold_binary(name: &str, kind: Kind, op: fn(f64, f64) -> f64) -> Result<Rule, RuleError> {
    Rule::builder(name)
        .tags(TAGS)
        .pattern("p(a, b)")
        .expect([kind.into(), Kind::Number.into(), Kind::Number.into()])
        .guard(move |m| match (m.number("a"), m.number("b")) {
            (Some(a), Some(b)) => op(a, b).is_finite(),
            _ => false,
        })
        .action(move |rw| {
            let value = op(rw.number("a")?, rw.number("b")?);
            rw.replace("p", Node::number(value))
        })
        .build()
}

/// Drops the neutral operand `unit` of a commutative operator.
fn drop_unit(name: &str, kind: Kind, unit: f64) -> Result<Rule, RuleError> {
    Rule::builder(name)
        .tags(TAGS)
        .pattern("p{u, x}")
        .expect([kind.into(), Kind::Number.into(), Expect::Any])
        .guard(move |m| m.is_number("u", unit))
        .action(|rw| {
            let x = rw.take("x")?;
            rw.replace("p", x)
        })
        .build()
}

/// Returns the algebraic rules.
///
/// # Errors
///
/// Fails only if a rule table entry is malformed.
pub fn rules() -> Result<Vec<Rule>, RuleError> {
    vec![
        // Constant folding
        fold_binary("fold-plus", Kind::Plus, |a, b| a + b),
        fold_binary("fold-product", Kind::Product, |a, b| a * b),
        fold_binary("fold-power", Kind::Power, f64::powf),
        Rule::builder("fold-negate")
            .tags(TAGS)
            .pattern("n(a)")
            .expect([Kind::Negate.into(), Kind::Number.into()])
            .action(|rw| {
                let value = -rw.number("a")?;
                rw.replace("n", Node::number(value))
            })
            .build(),
        Rule::builder("fold-ln")
            .tags(TAGS)
            .pattern("l(a)")
            .expect([Kind::Ln.into(), Kind::Number.into()])
            .guard(|m| m.number("a").is_some_and(|a| a > 0.0))
            .action(|rw| {
                let value = rw.number("a")?.ln();
                rw.replace("l", Node::number(value))
            })
            .build(),

        // Identities
        drop_unit("plus-zero", Kind::Plus, 0.0),
        drop_unit("product-one", Kind::Product, 1.0),
        Rule::builder("product-by-zero")
            .tags(TAGS)
            .pattern("p{z, x}")
            .expect([Kind::Product.into(), Kind::Number.into(), Expect::Any])
            .guard(|m| m.is_number("z", 0.0))
            .action(|rw| rw.replace("p", Node::number(0.0)))
            .build(),
        Rule::builder("power-one")
            .tags(TAGS)
            .pattern("p(x, k)")
            .expect([Kind::Power.into(), Expect::Any, Kind::Number.into()])
            .guard(|m| m.is_number("k", 1.0))
            .action(|rw| {
                let x = rw.take("x")?;
                rw.replace("p", x)
            })
            .build(),
        Rule::builder("power-zero")
            .tags(TAGS)
            .pattern("p(x, k)")
            .expect([Kind::Power.into(), Expect::Any, Kind::Number.into()])
            .guard(|m| m.is_number("k", 0.0))
            .action(|rw| rw.replace("p", Node::number(1.0)))
            .build(),
        Rule::builder("negate-negate")
            .tags(TAGS)
            .pattern("n(m(x))")
            .expect([Kind::Negate.into(), Kind::Negate.into(), Expect::Any])
            .action(|rw| {
                let x = rw.take("x")?;
                rw.replace("n", x)
            })
            .build(),
        Rule::builder("ln-one")
            .tags(TAGS)
            .pattern("l(a)")
            .expect([Kind::Ln.into(), Kind::Number.into()])
            .guard(|m| m.is_number("a", 1.0))
            .action(|rw| rw.replace("l", Node::number(0.0)))
            .build(),

        // x + x => 2 * x, constants are left to folding
        Rule::builder("plus-self")
            .tags(TAGS)
            .pattern("p(a, b)")
            .expect([Kind::Plus.into(), Expect::Any, Expect::Any])
            .guard(|m| match (m.node("a"), m.node("b")) {
                (Some(a), Some(b)) => !matches!(a, Node::Constant(_)) && structurally_equal(a, b, true),
                _ => false,
            })
            .action(|rw| {
                let a = rw.take("a")?;
                rw.replace("p", Node::product(Node::number(2.0), a))
            })
            .build(),
    ]
    .into_iter()
    .collect()
}
