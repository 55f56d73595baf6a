//! Property-based tests for unification.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sylva_core::{Literal, Node, Term, VarIndex};

    use crate::{apply_substitution, literals_equal, structurally_equal, Unifier};

    fn arb_term() -> impl Strategy<Value = Term> {
        let leaf = prop_oneof![
            (0u32..4).prop_map(Term::var),
            prop::sample::select(vec!["a", "b"]).prop_map(Term::constant),
        ];
        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|t| Term::app("f", vec![t])),
                (inner.clone(), inner).prop_map(|(s, t)| Term::app("g", vec![s, t])),
            ]
        })
    }

    fn arb_args() -> impl Strategy<Value = Vec<Term>> {
        prop::collection::vec(arb_term(), 2)
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            (0u32..3).prop_map(Node::var),
            any::<bool>().prop_map(Node::boolean),
        ];
        leaf.prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(Node::not),
                (inner.clone(), inner).prop_map(|(a, b)| Node::or(a, b)),
            ]
        })
    }

    proptest! {
        #[test]
        fn unifier_is_sound(left in arb_args(), right in arb_args()) {
            let a = Literal::positive("P", left);
            let b = Literal::negative("P", right);
            let unifier = Unifier::new().with_occurs_check(true);
            if let Some(subst) = unifier.compute(&a, &b) {
                prop_assert!(subst.is_idempotent());
                prop_assert!(unifier.can_unify(&a, &b));

                let mut a = Node::clause(vec![Node::predicate(a)]);
                let mut b = Node::clause(vec![Node::predicate(b)]);
                apply_substitution(&mut a, &subst);
                apply_substitution(&mut b, &subst);
                let (Some(a), Some(b)) = (a.children()[0].as_literal(), b.children()[0].as_literal()) else {
                    unreachable!()
                };
                prop_assert!(literals_equal(a, &b.clone().negate(), true));
            }
        }

        #[test]
        fn unifier_is_symmetric_in_success(left in arb_args(), right in arb_args()) {
            let unifier = Unifier::new().with_occurs_check(true);
            prop_assert_eq!(
                unifier.unify_terms(&left, &right).is_some(),
                unifier.unify_terms(&right, &left).is_some()
            );
        }

        #[test]
        fn identical_arguments_unify_trivially(args in arb_args()) {
            let subst = Unifier::new().unify_terms(&args, &args);
            prop_assert!(subst.is_some_and(|s| s.is_empty()));
        }

        #[test]
        fn loose_equality_is_reflexive_and_renaming_invariant(node in arb_node()) {
            prop_assert!(structurally_equal(&node, &node, true));
            prop_assert!(structurally_equal(&node, &node, false));

            let mut renamed = node.clone();
            shift_vars(&mut renamed, 10);
            prop_assert!(structurally_equal(&node, &renamed, false));
            prop_assert!(structurally_equal(&renamed, &node, false));
        }
    }

    fn shift_vars(node: &mut Node, by: u32) {
        if let Node::Variable(v) = node {
            *v = VarIndex::new(v.index() + by);
        }
        for child in node.children_mut() {
            shift_vars(child, by);
        }
    }
}
