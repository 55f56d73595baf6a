//! Cost functions over expression trees.
//!
//! The driver reports tree cost before and after a session; clients can
//! also use these to compare candidate rewrites.

use sylva_core::Node;

/// Assigns a cost to every node; the cost of a tree is the sum.
pub trait CostFunction {
    /// Cost of `node` alone, excluding its children.
    fn node_cost(&self, node: &Node) -> usize;

    /// Cost of the whole subtree rooted at `node`.
    fn cost(&self, node: &Node) -> usize {
        node.children()
            .iter()
            .fold(self.node_cost(node), |sum, child| sum + self.cost(child))
    }
}

/// A cost function that counts nodes.
///
/// This is the simplest cost function: prefer smaller trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstSize;

impl CostFunction for AstSize {
    fn node_cost(&self, _node: &Node) -> usize {
        1
    }
}

/// A cost function that weights operators by how expensive they are to
/// evaluate or reason about.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedCost;

impl CostFunction for WeightedCost {
    fn node_cost(&self, node: &Node) -> usize {
        match node {
            // Constants are free
            Node::Constant(_) => 0,
            Node::Variable(_) | Node::Negate(_) | Node::Not(_) => 1,
            Node::Plus(_) | Node::Product(_) | Node::And(_) | Node::Or(_) => 2,
            Node::Power(_) | Node::Predicate(_) => 3,
            Node::Ln(_) => 5,
            // An unevaluated derivative is the most expensive thing to keep
            Node::Differentiate(_) => 10,
            Node::Clause(literals) | Node::ClauseSet(literals) => literals.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ast_size() {
        let expr = Node::plus(Node::var(0), Node::number(0.0));
        assert_eq!(AstSize.cost(&expr), 3);
        assert_eq!(AstSize.cost(&expr), expr.size());
    }

    #[test]
    fn test_weighted_prefers_folded() {
        let unfolded = Node::plus(Node::number(2.0), Node::number(3.0));
        let folded = Node::number(5.0);
        assert!(WeightedCost.cost(&folded) < WeightedCost.cost(&unfolded));

        let d = Node::differentiate(Node::var(0), Node::var(0));
        assert_eq!(WeightedCost.cost(&d), 12);
    }
}
