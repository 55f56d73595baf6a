//! Benchmarks for unification and resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sylva::core::{Literal, Node, Term};
use sylva::rewrite::{Driver, RuleSet};
use sylva::unify::{resolution_rule, Unifier};

/// Builds `f(f(...f(leaf)))` of the given depth.
fn tower(depth: usize, leaf: Term) -> Term {
    (0..depth).fold(leaf, |t, _| Term::app("f", vec![t]))
}

/// A pair of literals whose unifier binds `width` variables.
fn literal_pair(width: u32, depth: usize) -> (Literal, Literal) {
    let left = (0..width).map(|i| tower(depth, Term::var(i))).collect();
    let right = (0..width)
        .map(|i| tower(depth, Term::app("g", vec![Term::var(width + i), Term::constant("a")])))
        .collect();
    (Literal::positive("P", left), Literal::negative("P", right))
}

/// A chain `P0(a), ~P0(X) | P1(X), ..., ~Pn(X)` that resolves step by step.
fn clause_chain(n: usize) -> Node {
    let mut clauses = vec![Node::clause(vec![Node::predicate(Literal::positive(
        "P0",
        vec![Term::constant("a")],
    ))])];
    for i in 0..n {
        clauses.push(Node::clause(vec![
            Node::predicate(Literal::negative(format!("P{i}"), vec![Term::var(0)])),
            Node::predicate(Literal::positive(format!("P{}", i + 1), vec![Term::var(0)])),
        ]));
    }
    Node::clause_set(clauses)
}

fn bench_unify(c: &mut Criterion) {
    let mut group = c.benchmark_group("unify");
    let unifier = Unifier::new();
    let checked = Unifier::new().with_occurs_check(true);

    for width in [4, 16, 64] {
        let (a, b) = literal_pair(width, 8);
        group.bench_with_input(BenchmarkId::new("compute", width), &width, |bench, _| {
            bench.iter(|| black_box(unifier.compute(&a, &b)))
        });
        group.bench_with_input(BenchmarkId::new("occurs_check", width), &width, |bench, _| {
            bench.iter(|| black_box(checked.compute(&a, &b)))
        });
    }

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let rules: RuleSet = [resolution_rule().expect("resolution rule")].into_iter().collect();
    let driver = Driver::new(rules);
    let mut group = c.benchmark_group("resolution");

    for n in [4, 16, 32] {
        let set = clause_chain(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &n, |b, _| {
            b.iter(|| black_box(driver.rewrite(set.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_unify, bench_resolution);
criterion_main!(benches);
