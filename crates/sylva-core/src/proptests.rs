//! Property-based tests for the tree model.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{check_strict_tree, Node, Path};

    // Strategy for small algebraic trees over three variables
    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            (-5i32..5).prop_map(|n| Node::number(f64::from(n))),
            (0u32..3).prop_map(Node::var),
        ];
        leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(Node::negate),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Node::plus(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Node::product(a, b)),
                (inner.clone(), inner).prop_map(|(a, b)| Node::power(a, b)),
            ]
        })
    }

    proptest! {
        #[test]
        fn clone_is_independent(expr in arb_node(), pick in any::<prop::sample::Index>()) {
            let mut original = expr;
            let copy = original.clone();
            let snapshot = copy.clone();

            let paths = original.postorder_paths();
            let target = &paths[pick.index(paths.len())];
            *original.at_mut(target).unwrap() = Node::var(99);

            prop_assert_eq!(&copy, &snapshot);
            prop_assert_eq!(original.at(target), Some(&Node::var(99)));
        }

        #[test]
        fn copy_survives_mutating_the_clone(expr in arb_node(), pick in any::<prop::sample::Index>()) {
            let original = expr;
            let mut copy = original.clone();
            let snapshot = original.clone();

            let paths = copy.postorder_paths();
            let target = &paths[pick.index(paths.len())];
            *copy.at_mut(target).unwrap() = Node::boolean(true);

            prop_assert_eq!(&original, &snapshot);
        }

        #[test]
        fn strict_tree_after_grafting(expr in arb_node(), picks in prop::collection::vec(any::<prop::sample::Index>(), 1..8)) {
            let mut tree = expr;
            for pick in picks {
                let paths = tree.postorder_paths();
                let from = &paths[pick.index(paths.len())];
                let graft = tree.at(from).unwrap().clone();
                let into = &paths[(pick.index(paths.len()) + 1) % paths.len()];
                if into.is_root() {
                    continue;
                }
                *tree.at_mut(into).unwrap() = Node::plus(graft.clone(), graft);
            }
            prop_assert_eq!(check_strict_tree(&tree), Ok(tree.size()));
        }

        #[test]
        fn every_postorder_path_resolves(expr in arb_node()) {
            let paths = expr.postorder_paths();
            prop_assert_eq!(paths.len(), expr.size());
            for path in &paths {
                prop_assert!(expr.at(path).is_some());
            }
            prop_assert_eq!(paths.last(), Some(&Path::root()));
        }
    }
}
