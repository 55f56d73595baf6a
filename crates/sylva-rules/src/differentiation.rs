//! Symbolic differentiation rules.
//!
//! `Differentiate(e, x)` is the derivative of `e` with respect to the
//! variable `x`. Each rule pushes the derivative one level down, so a
//! driver run leaves no `Differentiate` node above a differentiable
//! operand.

use sylva_core::{Kind, Node};
use sylva_rewrite::{Expect, Rule, RuleError, Tag};

const TAGS: [Tag; 3] = [Tag::Differentiation, Tag::Safe, Tag::Deductive];

/// Returns the differentiation rules.
///
/// # Errors
///
/// Fails only if a rule table entry is malformed.
pub fn rules() -> Result<Vec<Rule>, RuleError> {
    vec![
        // d(c)/dx = 0
        Rule::builder("d-constant")
            .tags(TAGS)
            .pattern("d(c, x)")
            .expect([Kind::Differentiate.into(), Kind::Number.into(), Kind::Variable.into()])
            .action(|rw| rw.replace("d", Node::number(0.0)))
            .build(),
        // dx/dx = 1
        Rule::builder("d-self")
            .tags(TAGS)
            .pattern("d(y, x)")
            .expect([Kind::Differentiate.into(), Kind::Variable.into(), Kind::Variable.into()])
            .guard(|m| m.variable("y") == m.variable("x"))
            .action(|rw| rw.replace("d", Node::number(1.0)))
            .build(),
        // dy/dx = 0
        Rule::builder("d-other-variable")
            .tags(TAGS)
            .pattern("d(y, x)")
            .expect([Kind::Differentiate.into(), Kind::Variable.into(), Kind::Variable.into()])
            .guard(|m| m.variable("y") != m.variable("x"))
            .action(|rw| rw.replace("d", Node::number(0.0)))
            .build(),
        Rule::builder("d-plus")
            .tags(TAGS)
            .pattern("d(p(u, v), x)")
            .expect([
                Kind::Differentiate.into(),
                Kind::Plus.into(),
                Expect::Any,
                Expect::Any,
                Kind::Variable.into(),
            ])
            .action(|rw| {
                let x = rw.copy_of("x")?;
                let u = rw.take("u")?;
                let v = rw.take("v")?;
                rw.replace(
                    "d",
                    Node::plus(Node::differentiate(u, x.clone()), Node::differentiate(v, x)),
                )
            })
            .build(),
        // d(uv) = d(u)·v + d(v)·u
        Rule::builder("d-product")
            .tags(TAGS)
            .pattern("d(p(u, v), x)")
            .expect([
                Kind::Differentiate.into(),
                Kind::Product.into(),
                Expect::Any,
                Expect::Any,
                Kind::Variable.into(),
            ])
            .action(|rw| {
                let x = rw.copy_of("x")?;
                let u2 = rw.copy_of("u")?;
                let v2 = rw.copy_of("v")?;
                let u = rw.take("u")?;
                let v = rw.take("v")?;
                rw.replace(
                    "d",
                    Node::plus(
                        Node::product(Node::differentiate(u, x.clone()), v2),
                        Node::product(Node::differentiate(v, x), u2),
                    ),
                )
            })
            .build(),
        Rule::builder("d-negate")
            .tags(TAGS)
            .pattern("d(n(u), x)")
            .expect([
                Kind::Differentiate.into(),
                Kind::Negate.into(),
                Expect::Any,
                Kind::Variable.into(),
            ])
            .action(|rw| {
                let x = rw.take("x")?;
                let u = rw.take("u")?;
                rw.replace("d", Node::negate(Node::differentiate(u, x)))
            })
            .build(),
        // d(u^k) = k·u^(k-1)·d(u), constant k
        Rule::builder("d-power")
            .tags(TAGS)
            .pattern("d(p(u, k), x)")
            .expect([
                Kind::Differentiate.into(),
                Kind::Power.into(),
                Expect::Any,
                Kind::Number.into(),
                Kind::Variable.into(),
            ])
            .action(|rw| {
                let k = rw.number("k")?;
                let x = rw.copy_of("x")?;
                let u2 = rw.copy_of("u")?;
                let u = rw.take("u")?;
                rw.replace(
                    "d",
                    Node::product(
                        Node::product(Node::number(k), Node::power(u2, Node::number(k - 1.0))),
                        Node::differentiate(u, x),
                    ),
                )
            })
            .build(),
        // d(ln u) = d(u)·u^-1
        Rule::builder("d-ln")
            .tags(TAGS)
            .pattern("d(l(u), x)")
            .expect([
                Kind::Differentiate.into(),
                Kind::Ln.into(),
                Expect::Any,
                Kind::Variable.into(),
            ])
            .action(|rw| {
                let x = rw.copy_of("x")?;
                let u2 = rw.copy_of("u")?;
                let u = rw.take("u")?;
                rw.replace(
                    "d",
                    Node::product(
                        Node::differentiate(u, x),
                        Node::power(u2, Node::number(-1.0)),
                    ),
                )
            })
            .build(),
    ]
    .into_iter()
    .collect()
}
