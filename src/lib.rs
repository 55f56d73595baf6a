//! # Sylva
//!
//! A tree-pattern rewriting engine for symbolic expressions, with
//! first-order unification and resolution.
//!
//! ## Features
//!
//! - **Owned Expression Trees**: single-parent nodes, explicit deep copies
//! - **Declarative Rules**: labelled patterns, expected variants and guards
//! - **Bottom-Up Driver**: fixpoint or single-pass rewriting with a budget
//! - **Unification**: most general unifiers and the resolution rule
//! - **Rule Tables**: algebra, differentiation and propositional logic
//!
//! ## Quick Start
//!
//! ```rust
//! use sylva::prelude::*;
//!
//! let rules = sylva::rules::safe_rules().unwrap();
//! let expr = Node::differentiate(Node::product(Node::var(0), Node::var(0)), Node::var(0));
//! let (result, stats) = Driver::new(rules).rewrite(expr).unwrap();
//! assert_eq!(result.to_string(), "(* 2 x0)");
//! assert!(stats.converged());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sylva_core as core;
pub use sylva_rewrite as rewrite;
pub use sylva_rules as rules;
pub use sylva_unify as unify;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sylva_core::{Constant, Kind, Literal, Node, Path, Term, VarIndex};
    pub use sylva_rewrite::{
        Driver, DriverConfig, Expect, Rule, RuleSet, StopReason, Strategy, Tag,
    };
    pub use sylva_unify::{structurally_equal, Substitution, Unifier};
}
