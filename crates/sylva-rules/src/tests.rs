//! End-to-end rewriting scenarios across the rule tables.

use sylva_core::{check_strict_tree, Kind, Literal, Node, Term};
use sylva_rewrite::{Driver, DriverConfig, RuleSet, StopReason, Strategy, Tag};
use sylva_unify::structurally_equal;

use crate::{all_rules, rule, safe_rules};

fn only(names: &[&str]) -> RuleSet {
    names
        .iter()
        .map(|name| rule(name).unwrap().unwrap())
        .collect()
}

#[test]
fn test_product_by_zero() {
    let expr = Node::product(Node::number(0.0), Node::var(0));
    let (result, stats) = Driver::new(only(&["product-by-zero"])).rewrite(expr).unwrap();
    assert_eq!(result, Node::number(0.0));
    assert_eq!(stats.fired("product-by-zero"), 1);
}

#[test]
fn test_fold_plus() {
    let expr = Node::plus(Node::number(2.0), Node::number(3.0));
    let (result, _) = Driver::new(only(&["fold-plus"])).rewrite(expr).unwrap();
    assert_eq!(result, Node::number(5.0));
}

#[test]
fn test_product_rule_before_folding() {
    let expr = Node::differentiate(Node::product(Node::var(0), Node::var(0)), Node::var(0));
    let (result, _) = Driver::new(only(&["d-product", "d-self"])).rewrite(expr.clone()).unwrap();

    let expected = Node::plus(
        Node::product(Node::number(1.0), Node::var(0)),
        Node::product(Node::number(1.0), Node::var(0)),
    );
    assert!(structurally_equal(&result, &expected, true));
    check_strict_tree(&result).unwrap();

    // With the full safe set the derivative folds down to 2 * x0
    let (result, stats) = Driver::new(safe_rules().unwrap()).rewrite(expr).unwrap();
    assert_eq!(result, Node::product(Node::number(2.0), Node::var(0)));
    assert!(stats.converged());
    assert!(stats.size_after < stats.size_before);
}

#[test]
fn test_resolution_derives_empty_clauses() {
    let args = vec![Term::var(0), Term::constant("a")];
    let expr = Node::clause_set(vec![
        Node::clause(vec![Node::predicate(Literal::positive("P", args.clone()))]),
        Node::clause(vec![Node::predicate(Literal::negative("P", args))]),
    ]);
    let (result, stats) = Driver::new(only(&["resolution"])).rewrite(expr).unwrap();
    assert_eq!(
        result,
        Node::clause_set(vec![Node::clause(vec![]), Node::clause(vec![])])
    );
    assert_eq!(stats.fired("resolution"), 1);
}

#[test]
fn test_tautology() {
    let expr = Node::or(Node::var(0), Node::not(Node::var(0)));
    let (result, _) = Driver::new(only(&["tautology"])).rewrite(expr).unwrap();
    assert_eq!(result, Node::boolean(true));
}

#[test]
fn test_safe_rules_exclude_resolution() {
    let all = all_rules().unwrap();
    let safe = safe_rules().unwrap();
    assert!(all.get("resolution").is_some());
    assert!(safe.get("resolution").is_none());
    assert_eq!(safe.len() + 1, all.len());
    assert_eq!(all.with_tag(Tag::Resolution).names(), ["resolution"]);
    assert!(rule("no-such-rule").unwrap().is_none());
}

#[test]
fn test_mixed_tree() {
    // (x0 | ~x0) & d((1 + 2) * x1, x1) is not well typed, but rules only
    // look at shape and variant, so each side simplifies on its own
    let expr = Node::and(
        Node::or(Node::var(0), Node::not(Node::var(0))),
        Node::differentiate(
            Node::product(Node::plus(Node::number(1.0), Node::number(2.0)), Node::var(1)),
            Node::var(1),
        ),
    );
    let (result, stats) = Driver::new(all_rules().unwrap()).rewrite(expr).unwrap();
    assert_eq!(result, Node::number(3.0));
    assert!(stats.fired("fold-plus") >= 1);
    assert_eq!(stats.fired("tautology"), 1);
}

#[test]
fn test_single_pass_leaves_work_behind() {
    // The product rule creates new derivatives below the rewritten node
    let expr = Node::differentiate(Node::product(Node::var(0), Node::var(0)), Node::var(0));
    let config = DriverConfig::default().with_strategy(Strategy::SinglePass);
    let (once, stats) = Driver::new(safe_rules().unwrap())
        .with_config(config)
        .rewrite(expr.clone())
        .unwrap();
    assert_eq!(stats.stop_reason, StopReason::SinglePass);
    assert_eq!(stats.rewrites, 1);
    assert_eq!(once.kind(), Kind::Plus);
    assert_eq!(once.children()[0].kind(), Kind::Product);
    assert_eq!(
        once.children()[0].children()[0],
        Node::differentiate(Node::var(0), Node::var(0))
    );

    let (full, _) = Driver::new(safe_rules().unwrap()).rewrite(expr).unwrap();
    assert_eq!(full, Node::product(Node::number(2.0), Node::var(0)));
}
